use axum::{routing::get, Router};

use crate::state::GatewayState;

pub mod hotels;
pub mod reservations;
pub mod users;

/// Gateway routes, relative to `/api/v1`
pub fn routes() -> Router<GatewayState> {
    Router::new()
        .route("/hotels", get(hotels::list_hotels))
        .route("/me", get(users::get_me))
        .route("/loyalty", get(users::get_loyalty))
        .route(
            "/reservations",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route(
            "/reservations/{reservation_uid}",
            get(reservations::get_reservation).delete(reservations::delete_reservation),
        )
}
