use axum::{http::StatusCode, routing::get, Router};

/// GET /manage/health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/manage/health", get(health))
}
