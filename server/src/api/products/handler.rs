//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use crate::db::repository::ProductRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// 商品字段校验：价格非负
fn validate_price(price: Decimal) -> AppResult<()> {
    if price < Decimal::ZERO {
        return Err(AppError::validation("Price cannot be negative"));
    }
    Ok(())
}

/// GET /api/products - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_all().await?;
    Ok(Json(products))
}

/// GET /api/products/:name - 获取单个商品
pub async fn get_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_name(&name)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {} not found", name)))?;
    Ok(Json(product))
}

#[derive(Debug, Deserialize)]
pub struct ProductNamesRequest {
    pub names: Vec<String>,
}

/// POST /api/products/by-names - 按名称批量获取商品
///
/// 任何一个名称不存在则整体失败 (404)
pub async fn get_by_names(
    State(state): State<ServerState>,
    Json(payload): Json<ProductNamesRequest>,
) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_by_names(&payload.names).await?;
    Ok(Json(products))
}

/// POST /api/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    validate_price(payload.price)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/:name - 更新商品
pub async fn update(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    if let Some(price) = payload.price {
        validate_price(price)?;
    }

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.update(&name, payload).await?;
    Ok(Json(product))
}

/// DELETE /api/products/:name - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = ProductRepository::new(state.db.clone());
    if !repo.exists(&name).await? {
        return Err(AppError::not_found(format!("Product {} not found", name)));
    }
    let result = repo.delete(&name).await?;
    Ok(Json(result))
}
