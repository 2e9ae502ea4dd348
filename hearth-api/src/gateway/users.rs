use axum::{extract::State, Json};
use hearth_shared::views::{LoyaltyInfoResponse, UserInfoResponse};

use crate::error::AppError;
use crate::identity::CallerName;
use crate::state::GatewayState;

/// GET /api/v1/me
pub async fn get_me(
    State(state): State<GatewayState>,
    caller: CallerName,
) -> Result<Json<UserInfoResponse>, AppError> {
    let info = state.gateway.read_user_info(caller.as_str()).await?;
    Ok(Json(info))
}

/// GET /api/v1/loyalty
pub async fn get_loyalty(
    State(state): State<GatewayState>,
    caller: CallerName,
) -> Result<Json<LoyaltyInfoResponse>, AppError> {
    let loyalty = state.gateway.read_user_loyalty(caller.as_str()).await?;
    Ok(Json(loyalty))
}
