use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use hearth_shared::views::{CreateReservationRequest, CreateReservationResponse, ReservationResponse};

use crate::error::AppError;
use crate::identity::CallerName;
use crate::state::GatewayState;

/// GET /api/v1/reservations
pub async fn list_reservations(
    State(state): State<GatewayState>,
    caller: CallerName,
) -> Result<Json<Vec<ReservationResponse>>, AppError> {
    let reservations = state.gateway.read_user_reservations(caller.as_str()).await?;
    Ok(Json(reservations))
}

/// POST /api/v1/reservations
/// Book a stay: charge, reserve, bump loyalty
pub async fn create_reservation(
    State(state): State<GatewayState>,
    caller: CallerName,
    body: Result<Json<CreateReservationRequest>, JsonRejection>,
) -> Result<Json<CreateReservationResponse>, AppError> {
    let Json(req) = body?;
    let created = state.gateway.create_reservation(caller.as_str(), &req).await?;
    Ok(Json(created))
}

/// GET /api/v1/reservations/{reservation_uid}
pub async fn get_reservation(
    State(state): State<GatewayState>,
    Path(reservation_uid): Path<String>,
    caller: CallerName,
) -> Result<Json<ReservationResponse>, AppError> {
    let reservation = state
        .gateway
        .read_reservation(&reservation_uid, caller.as_str())
        .await?;
    Ok(Json(reservation))
}

/// DELETE /api/v1/reservations/{reservation_uid}
/// Cancel a reservation together with its payment
pub async fn delete_reservation(
    State(state): State<GatewayState>,
    Path(reservation_uid): Path<String>,
    caller: CallerName,
) -> Result<StatusCode, AppError> {
    state
        .gateway
        .delete_reservation(&reservation_uid, caller.as_str())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
