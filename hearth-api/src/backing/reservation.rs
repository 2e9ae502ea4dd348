use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use hearth_shared::{Hotel, HotelPage, Reservation};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::identity::CallerName;
use crate::state::ReservationState;

pub fn routes() -> Router<ReservationState> {
    Router::new()
        .route("/hotels", get(list_hotels))
        .route("/hotels/id/{hotel_id}", get(get_hotel_by_id))
        .route("/hotels/{hotel_uid}", get(get_hotel_by_uid))
        .route("/reservations", get(list_reservations).post(create_reservation))
        .route(
            "/reservations/{reservation_uid}",
            get(get_reservation).put(update_reservation),
        )
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: i64,
    pub size: i64,
}

fn parse_uid(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("invalid uid: {}", raw)))
}

/// GET /api/v1/hotels?page=&size=
async fn list_hotels(
    State(state): State<ReservationState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<HotelPage>, AppError> {
    let Query(params) = params?;
    let page = state.service.read_paginated_hotels(params.page, params.size).await?;
    Ok(Json(page))
}

/// GET /api/v1/hotels/{hotel_uid}
async fn get_hotel_by_uid(
    State(state): State<ReservationState>,
    Path(hotel_uid): Path<String>,
) -> Result<Json<Hotel>, AppError> {
    let hotel = state.service.read_hotel_by_uid(parse_uid(&hotel_uid)?).await?;
    Ok(Json(hotel))
}

/// GET /api/v1/hotels/id/{hotel_id}
async fn get_hotel_by_id(
    State(state): State<ReservationState>,
    hotel_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Hotel>, AppError> {
    let Path(hotel_id) = hotel_id?;
    let hotel = state.service.read_hotel_by_id(hotel_id).await?;
    Ok(Json(hotel))
}

/// GET /api/v1/reservations
async fn list_reservations(
    State(state): State<ReservationState>,
    caller: CallerName,
) -> Result<Json<Vec<Reservation>>, AppError> {
    let reservations = state
        .service
        .read_reservations_by_username(caller.as_str())
        .await?;
    Ok(Json(reservations))
}

/// POST /api/v1/reservations
async fn create_reservation(
    State(state): State<ReservationState>,
    body: Result<Json<Reservation>, JsonRejection>,
) -> Result<(StatusCode, Json<Reservation>), AppError> {
    let Json(reservation) = body?;
    let created = state.service.create_reservation(reservation).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/reservations/{reservation_uid}
async fn get_reservation(
    State(state): State<ReservationState>,
    Path(reservation_uid): Path<String>,
) -> Result<Json<Reservation>, AppError> {
    let reservation = state
        .service
        .read_reservation_by_uid(parse_uid(&reservation_uid)?)
        .await?;
    Ok(Json(reservation))
}

/// PUT /api/v1/reservations/{reservation_uid}
/// The uid in the path wins over the one in the body
async fn update_reservation(
    State(state): State<ReservationState>,
    Path(reservation_uid): Path<String>,
    body: Result<Json<Reservation>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let uid = parse_uid(&reservation_uid)?;
    let Json(mut reservation) = body?;
    reservation.uid = uid;
    state.service.update_reservation(&reservation).await?;
    Ok(StatusCode::NO_CONTENT)
}
