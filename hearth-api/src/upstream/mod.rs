//! `reqwest` implementations of the gateway's upstream client ports.

use hearth_core::{CoreError, CoreResult};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub mod loyalty;
pub mod payment;
pub mod reservation;

pub use loyalty::HttpLoyaltyClient;
pub use payment::HttpPaymentClient;
pub use reservation::HttpReservationClient;

/// One shared connection pool for all three services
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Base URL plus error mapping shared by the service clients
#[derive(Clone)]
pub struct UpstreamHttp {
    service: &'static str,
    base_url: String,
    client: reqwest::Client,
}

impl UpstreamHttp {
    pub fn new(service: &'static str, base_url: &str, client: reqwest::Client) -> Self {
        Self {
            service,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    fn failure(&self, message: String) -> CoreError {
        CoreError::Upstream {
            service: self.service,
            message,
        }
    }

    /// Send and classify: 404 is `NotFound`, other non-2xx and transport errors are `Upstream`.
    pub async fn send(&self, request: RequestBuilder, what: &str) -> CoreResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| self.failure(format!("{}: {}", what, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CoreError::NotFound(what.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(service = self.service, %status, what, "Upstream call rejected");
            return Err(self.failure(format!("{} returned {}: {}", what, status, body)));
        }
        Ok(response)
    }

    pub async fn decode<T: DeserializeOwned>(&self, response: Response, what: &str) -> CoreResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| self.failure(format!("{}: undecodable body: {}", what, e)))
    }
}
