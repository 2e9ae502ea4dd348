use async_trait::async_trait;
use hearth_core::upstream::LoyaltyClient;
use hearth_core::CoreResult;
use hearth_shared::{Loyalty, USER_HEADER};

use super::UpstreamHttp;

pub struct HttpLoyaltyClient {
    http: UpstreamHttp,
}

impl HttpLoyaltyClient {
    pub fn new(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            http: UpstreamHttp::new("loyalty", base_url, client),
        }
    }
}

#[async_trait]
impl LoyaltyClient for HttpLoyaltyClient {
    async fn get_loyalty(&self, username: &str) -> CoreResult<Loyalty> {
        let what = format!("loyalty of {}", username);
        let request = self
            .http
            .client()
            .get(self.http.url("/loyalty"))
            .header(USER_HEADER, username);
        let response = self.http.send(request, &what).await?;
        self.http.decode(response, &what).await
    }

    async fn update_loyalty(&self, loyalty: &Loyalty) -> CoreResult<Loyalty> {
        let what = format!("loyalty of {}", loyalty.username);
        let request = self
            .http
            .client()
            .put(self.http.url("/loyalty"))
            .header(USER_HEADER, loyalty.username.as_str())
            .json(loyalty);
        let response = self.http.send(request, &what).await?;
        self.http.decode(response, &what).await
    }
}
