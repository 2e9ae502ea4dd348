use axum::{extract::FromRequestParts, http::request::Parts};
use hearth_shared::USER_HEADER;
use std::convert::Infallible;

/// `X-User-Name` in the lowercase form `HeaderName::from_static` requires
pub const USER_HEADER_LOWER: &str = "x-user-name";

/// Caller identity taken verbatim from the `X-User-Name` header.
///
/// Nothing authenticates this value. A missing or non-UTF-8 header yields
/// an empty name, which the services reject or treat as an unknown user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerName(pub String);

impl CallerName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CallerName
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let name = parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().to_string())
            .unwrap_or_default();
        Ok(CallerName(name))
    }
}
