use std::sync::Arc;

use hearth_shared::Payment;
use tracing::info;
use uuid::Uuid;

use crate::repository::PaymentRepository;
use crate::{CoreError, CoreResult};

#[derive(Clone)]
pub struct PaymentService {
    payments: Arc<dyn PaymentRepository>,
}

impl PaymentService {
    pub fn new(payments: Arc<dyn PaymentRepository>) -> Self {
        Self { payments }
    }

    /// Record a new PAID payment of `price`
    pub async fn create_payment(&self, price: i32) -> CoreResult<Payment> {
        if price < 0 {
            return Err(CoreError::InvalidParameters(format!("negative price {}", price)));
        }

        let payment = self.payments.insert(&Payment::paid(price)).await?;
        info!(payment_uid = %payment.uid, price, "Payment created");
        Ok(payment)
    }

    pub async fn read_payment_by_uid(&self, uid: Uuid) -> CoreResult<Payment> {
        self.payments
            .get_by_uid(uid)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("payment {}", uid)))
    }

    pub async fn update_payment(&self, payment: &Payment) -> CoreResult<Payment> {
        if payment.price < 0 {
            return Err(CoreError::InvalidParameters(format!("negative price {}", payment.price)));
        }

        let updated = self
            .payments
            .update(payment)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("payment {}", payment.uid)))?;
        info!(payment_uid = %updated.uid, status = %updated.status, "Payment updated");
        Ok(updated)
    }
}
