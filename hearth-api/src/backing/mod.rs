//! HTTP surfaces of the three backing services.

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::health;
use crate::state::{LoyaltyState, PaymentState, ReservationState};

pub mod loyalty;
pub mod payment;
pub mod reservation;

pub fn reservation_app(state: ReservationState) -> Router {
    Router::new()
        .nest("/api/v1", reservation::routes())
        .merge(health::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn payment_app(state: PaymentState) -> Router {
    Router::new()
        .nest("/api/v1", payment::routes())
        .merge(health::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn loyalty_app(state: LoyaltyState) -> Router {
    Router::new()
        .nest("/api/v1", loyalty::routes())
        .merge(health::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
