use async_trait::async_trait;
use hearth_core::upstream::PaymentClient;
use hearth_core::CoreResult;
use hearth_shared::views::CreatePaymentRequest;
use hearth_shared::Payment;
use uuid::Uuid;

use super::UpstreamHttp;

pub struct HttpPaymentClient {
    http: UpstreamHttp,
}

impl HttpPaymentClient {
    pub fn new(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            http: UpstreamHttp::new("payment", base_url, client),
        }
    }
}

#[async_trait]
impl PaymentClient for HttpPaymentClient {
    async fn create_payment(&self, price: i32) -> CoreResult<Payment> {
        let request = self
            .http
            .client()
            .post(self.http.url("/payment"))
            .json(&CreatePaymentRequest { price });
        let response = self.http.send(request, "new payment").await?;
        self.http.decode(response, "new payment").await
    }

    async fn get_payment(&self, uid: Uuid) -> CoreResult<Payment> {
        let what = format!("payment {}", uid);
        let request = self.http.client().get(self.http.url(&format!("/payment/{}", uid)));
        let response = self.http.send(request, &what).await?;
        self.http.decode(response, &what).await
    }

    async fn update_payment(&self, payment: &Payment) -> CoreResult<()> {
        let what = format!("payment {}", payment.uid);
        let request = self
            .http
            .client()
            .put(self.http.url(&format!("/payment/{}", payment.uid)))
            .json(payment);
        self.http.send(request, &what).await?;
        Ok(())
    }
}
