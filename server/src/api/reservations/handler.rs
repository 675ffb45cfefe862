//! Reservation API Handlers
//!
//! Thin layer over [`BookingManager`]: every invariant lives in the
//! engine, the handlers only translate errors to HTTP statuses
//! (validation 400, conflict 409, missing 404).
//!
//! [`BookingManager`]: crate::booking::BookingManager

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Reservation, ReservationCreate};
use crate::utils::{AppError, AppResult};

/// GET /api/reservations - 获取所有预订
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = state.booking.get_all().await?;
    Ok(Json(reservations))
}

/// GET /api/reservations/:id - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let reservation = state
        .booking
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", id)))?;
    Ok(Json(reservation))
}

/// POST /api/reservations - 创建预订
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let reservation = state.booking.create(payload).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// PUT /api/reservations/:id - 更新预订
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.booking.update(&id, payload).await?;
    Ok(Json(reservation))
}

/// DELETE /api/reservations/:id - 删除预订
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.booking.delete(&id).await?;
    Ok(Json(true))
}
