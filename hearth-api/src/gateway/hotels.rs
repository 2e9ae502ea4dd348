use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hearth_core::gateway::HotelListing;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::GatewayState;

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: i64,
    pub size: i64,
}

/// GET /api/v1/hotels?page=&size=
/// 204 when the requested page holds no hotels
pub async fn list_hotels(
    State(state): State<GatewayState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params?;

    match state.gateway.read_paginated_hotels(params.page, params.size).await? {
        HotelListing::Empty => Ok(StatusCode::NO_CONTENT.into_response()),
        HotelListing::Page(page) => Ok(Json(page).into_response()),
    }
}
