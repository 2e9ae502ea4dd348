use async_trait::async_trait;
use hearth_core::repository::LoyaltyRepository;
use hearth_core::{CoreError, CoreResult};
use hearth_shared::{Loyalty, LoyaltyStatus};
use sqlx::PgPool;

use crate::storage_error;

pub struct StoreLoyaltyRepository {
    pool: PgPool,
}

impl StoreLoyaltyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LoyaltyRow {
    id: i32,
    username: String,
    reservation_count: i32,
    status: String,
    discount: i32,
}

impl TryFrom<LoyaltyRow> for Loyalty {
    type Error = CoreError;

    fn try_from(row: LoyaltyRow) -> Result<Self, Self::Error> {
        Ok(Loyalty {
            id: row.id,
            username: row.username,
            reservation_count: row.reservation_count,
            status: row.status.parse::<LoyaltyStatus>().map_err(CoreError::Storage)?,
            discount: row.discount,
        })
    }
}

#[async_trait]
impl LoyaltyRepository for StoreLoyaltyRepository {
    async fn get_by_username(&self, username: &str) -> CoreResult<Option<Loyalty>> {
        let row = sqlx::query_as::<_, LoyaltyRow>(
            "SELECT id, username, reservation_count, status, discount FROM loyalty WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.map(Loyalty::try_from).transpose()
    }

    async fn insert(&self, loyalty: &Loyalty) -> CoreResult<Loyalty> {
        let row = sqlx::query_as::<_, LoyaltyRow>(
            "INSERT INTO loyalty (username, reservation_count, status, discount) VALUES ($1, $2, $3, $4) \
             RETURNING id, username, reservation_count, status, discount",
        )
        .bind(&loyalty.username)
        .bind(loyalty.reservation_count)
        .bind(loyalty.status.as_str())
        .bind(loyalty.discount)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        Loyalty::try_from(row)
    }

    async fn update(&self, loyalty: &Loyalty) -> CoreResult<Option<Loyalty>> {
        let row = sqlx::query_as::<_, LoyaltyRow>(
            "UPDATE loyalty SET reservation_count = $2, status = $3, discount = $4 WHERE username = $1 \
             RETURNING id, username, reservation_count, status, discount",
        )
        .bind(&loyalty.username)
        .bind(loyalty.reservation_count)
        .bind(loyalty.status.as_str())
        .bind(loyalty.discount)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.map(Loyalty::try_from).transpose()
    }
}
