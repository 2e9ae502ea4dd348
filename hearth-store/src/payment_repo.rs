use async_trait::async_trait;
use hearth_core::repository::PaymentRepository;
use hearth_core::{CoreError, CoreResult};
use hearth_shared::{BookingStatus, Payment};
use sqlx::PgPool;
use uuid::Uuid;

use crate::storage_error;

pub struct StorePaymentRepository {
    pool: PgPool,
}

impl StorePaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PaymentRow {
    id: i32,
    payment_uid: Uuid,
    status: String,
    price: i32,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = CoreError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        Ok(Payment {
            id: row.id,
            uid: row.payment_uid,
            status: row.status.parse::<BookingStatus>().map_err(CoreError::Storage)?,
            price: row.price,
        })
    }
}

#[async_trait]
impl PaymentRepository for StorePaymentRepository {
    async fn get_by_uid(&self, uid: Uuid) -> CoreResult<Option<Payment>> {
        let row = sqlx::query_as::<_, PaymentRow>(
            "SELECT id, payment_uid, status, price FROM payment WHERE payment_uid = $1",
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.map(Payment::try_from).transpose()
    }

    async fn insert(&self, payment: &Payment) -> CoreResult<Payment> {
        let row = sqlx::query_as::<_, PaymentRow>(
            "INSERT INTO payment (payment_uid, status, price) VALUES ($1, $2, $3) \
             RETURNING id, payment_uid, status, price",
        )
        .bind(payment.uid)
        .bind(payment.status.as_str())
        .bind(payment.price)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        Payment::try_from(row)
    }

    async fn update(&self, payment: &Payment) -> CoreResult<Option<Payment>> {
        let row = sqlx::query_as::<_, PaymentRow>(
            "UPDATE payment SET status = $2, price = $3 WHERE payment_uid = $1 \
             RETURNING id, payment_uid, status, price",
        )
        .bind(payment.uid)
        .bind(payment.status.as_str())
        .bind(payment.price)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.map(Payment::try_from).transpose()
    }
}
