use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use hearth_shared::Loyalty;

use crate::error::AppError;
use crate::identity::CallerName;
use crate::state::LoyaltyState;

pub fn routes() -> Router<LoyaltyState> {
    Router::new().route("/loyalty", get(get_loyalty).put(put_loyalty))
}

/// GET /api/v1/loyalty
async fn get_loyalty(
    State(state): State<LoyaltyState>,
    caller: CallerName,
) -> Result<Json<Loyalty>, AppError> {
    let loyalty = state.service.read_loyalty_by_username(caller.as_str()).await?;
    Ok(Json(loyalty))
}

/// PUT /api/v1/loyalty
/// Upsert for the caller; status and discount are recomputed from the count
async fn put_loyalty(
    State(state): State<LoyaltyState>,
    caller: CallerName,
    body: Result<Json<Loyalty>, JsonRejection>,
) -> Result<Json<Loyalty>, AppError> {
    let Json(mut loyalty) = body?;
    if !caller.as_str().is_empty() {
        loyalty.username = caller.0;
    }
    let saved = state.service.save_loyalty(loyalty).await?;
    Ok(Json(saved))
}
