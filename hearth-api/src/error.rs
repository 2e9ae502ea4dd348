use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hearth_core::CoreError;
use hearth_shared::views::ErrorResponse;

#[derive(Debug)]
pub enum AppError {
    Core(CoreError),
    BadRequest(String),
    Anyhow(anyhow::Error),
}

const INTERNAL: &str = "Internal Server Error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Core(CoreError::InvalidParameters(msg)) => (StatusCode::BAD_REQUEST, msg),
            AppError::Core(CoreError::Validation(report)) => {
                return (StatusCode::BAD_REQUEST, Json(report)).into_response();
            }
            AppError::Core(CoreError::NotFound(msg)) => (StatusCode::NOT_FOUND, msg),
            AppError::Core(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL.to_string())
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL.to_string())
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        Self::Core(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Anyhow(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
