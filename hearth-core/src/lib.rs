pub mod fanout;
pub mod gateway;
pub mod pricing;
pub mod repository;
pub mod saga;
pub mod services;
pub mod upstream;
pub mod validation;

use hearth_shared::views::ValidationErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
    #[error("{}", .0.message)]
    Validation(ValidationErrorResponse),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("{service} service failed: {message}")]
    Upstream { service: &'static str, message: String },
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Internal service error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound(_))
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
