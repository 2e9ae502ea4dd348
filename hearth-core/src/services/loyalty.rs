use std::sync::Arc;

use hearth_shared::Loyalty;
use tracing::info;

use crate::repository::LoyaltyRepository;
use crate::{CoreError, CoreResult};

#[derive(Clone)]
pub struct LoyaltyService {
    loyalty: Arc<dyn LoyaltyRepository>,
}

impl LoyaltyService {
    pub fn new(loyalty: Arc<dyn LoyaltyRepository>) -> Self {
        Self { loyalty }
    }

    pub async fn read_loyalty_by_username(&self, username: &str) -> CoreResult<Loyalty> {
        self.loyalty
            .get_by_username(username)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("loyalty of {}", username)))
    }

    /// Upsert the record for `loyalty.username`. Status and discount are
    /// always derived from the reservation count, whatever the caller sent.
    pub async fn save_loyalty(&self, mut loyalty: Loyalty) -> CoreResult<Loyalty> {
        if loyalty.username.trim().is_empty() {
            return Err(CoreError::InvalidParameters("username is required".to_string()));
        }
        loyalty.recompute_tier();

        let saved = match self.loyalty.update(&loyalty).await? {
            Some(updated) => updated,
            None => self.loyalty.insert(&loyalty).await?,
        };
        info!(
            username = %saved.username,
            reservation_count = saved.reservation_count,
            status = %saved.status,
            "Loyalty saved"
        );
        Ok(saved)
    }
}
