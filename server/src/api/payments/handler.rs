//! Payment API Handlers (proxy)
//!
//! 每个接口保持与原支付代理一致的错误映射：
//! 查询失败一律 404，创建失败一律 400。

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::services::{Payment, PaymentCreate};
use crate::utils::{AppError, AppResult};

/// GET /api/payments/by-order/:order_id - 按订单查询支付
pub async fn get_by_order_id(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<Payment>> {
    let payment = state
        .payments
        .get_by_order_id(&order_id)
        .await
        .map_err(|e| {
            tracing::warn!(order_id = %order_id, error = %e, "Payment lookup failed");
            AppError::not_found(format!("Payment for order {} not found", order_id))
        })?;
    Ok(Json(payment))
}

/// POST /api/payments - 创建支付 (转发给支付服务)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PaymentCreate>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    let payment = state.payments.create(&payload).await.map_err(|e| {
        tracing::warn!(order_id = %payload.order_id, error = %e, "Payment creation failed");
        AppError::validation(e.to_string())
    })?;
    Ok((StatusCode::CREATED, Json(payment)))
}
