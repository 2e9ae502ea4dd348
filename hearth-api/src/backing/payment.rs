use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use hearth_shared::views::CreatePaymentRequest;
use hearth_shared::Payment;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::PaymentState;

pub fn routes() -> Router<PaymentState> {
    Router::new()
        .route("/payment", post(create_payment))
        .route("/payment/{payment_uid}", get(get_payment).put(update_payment))
}

fn parse_uid(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("invalid uid: {}", raw)))
}

/// POST /api/v1/payment
async fn create_payment(
    State(state): State<PaymentState>,
    body: Result<Json<CreatePaymentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Payment>), AppError> {
    let Json(req) = body?;
    let payment = state.service.create_payment(req.price).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

/// GET /api/v1/payment/{payment_uid}
async fn get_payment(
    State(state): State<PaymentState>,
    Path(payment_uid): Path<String>,
) -> Result<Json<Payment>, AppError> {
    let payment = state.service.read_payment_by_uid(parse_uid(&payment_uid)?).await?;
    Ok(Json(payment))
}

/// PUT /api/v1/payment/{payment_uid}
async fn update_payment(
    State(state): State<PaymentState>,
    Path(payment_uid): Path<String>,
    body: Result<Json<Payment>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let uid = parse_uid(&payment_uid)?;
    let Json(mut payment) = body?;
    payment.uid = uid;
    state.service.update_payment(&payment).await?;
    Ok(StatusCode::NO_CONTENT)
}
