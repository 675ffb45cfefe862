//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`products`] - 商品管理接口
//! - [`tables`] - 桌台管理接口
//! - [`reservations`] - 预订管理接口
//! - [`payments`] - 支付代理接口

pub mod health;
pub mod payments;
pub mod products;
pub mod reservations;
pub mod tables;

use axum::Router;

use crate::core::ServerState;

/// Assemble the full API router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(products::router())
        .merge(tables::router())
        .merge(reservations::router())
        .merge(payments::router())
}
