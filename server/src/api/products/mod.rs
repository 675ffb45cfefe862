//! Product API 模块

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/products", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/by-names", post(handler::get_by_names))
        .route(
            "/{name}",
            get(handler::get_by_name)
                .put(handler::update)
                .delete(handler::delete),
        )
}
