use axum::{
    http::{HeaderName, Method},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod backing;
pub mod bootstrap;
pub mod error;
pub mod gateway;
pub mod health;
pub mod identity;
pub mod state;
pub mod telemetry;
pub mod upstream;

pub use state::GatewayState;

/// Client-facing router: every gateway route under `/api/v1`, plus the health probe
pub fn gateway_app(state: GatewayState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
            HeaderName::from_static(identity::USER_HEADER_LOWER),
        ]);

    Router::new()
        .nest("/api/v1", gateway::routes())
        .merge(health::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
