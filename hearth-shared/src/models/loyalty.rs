use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Loyalty tier, derived from the number of active reservations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoyaltyStatus {
    Bronze,
    Silver,
    Gold,
}

impl LoyaltyStatus {
    pub fn for_reservation_count(count: i32) -> Self {
        if count > 20 {
            LoyaltyStatus::Gold
        } else if count > 10 {
            LoyaltyStatus::Silver
        } else {
            LoyaltyStatus::Bronze
        }
    }

    /// Discount percentage granted by the tier
    pub fn discount(&self) -> i32 {
        match self {
            LoyaltyStatus::Bronze => 5,
            LoyaltyStatus::Silver => 7,
            LoyaltyStatus::Gold => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoyaltyStatus::Bronze => "BRONZE",
            LoyaltyStatus::Silver => "SILVER",
            LoyaltyStatus::Gold => "GOLD",
        }
    }
}

impl fmt::Display for LoyaltyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoyaltyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BRONZE" => Ok(LoyaltyStatus::Bronze),
            "SILVER" => Ok(LoyaltyStatus::Silver),
            "GOLD" => Ok(LoyaltyStatus::Gold),
            other => Err(format!("unknown loyalty status: {}", other)),
        }
    }
}

/// Per-user loyalty record. `status` and `discount` always follow `reservation_count`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Loyalty {
    #[serde(default)]
    pub id: i32,
    pub username: String,
    pub reservation_count: i32,
    pub status: LoyaltyStatus,
    pub discount: i32,
}

impl Loyalty {
    /// A first-time member with no reservations yet
    pub fn new(username: &str) -> Self {
        let mut loyalty = Self {
            id: 0,
            username: username.to_string(),
            reservation_count: 0,
            status: LoyaltyStatus::Bronze,
            discount: 0,
        };
        loyalty.recompute_tier();
        loyalty
    }

    pub fn recompute_tier(&mut self) {
        self.reservation_count = self.reservation_count.max(0);
        self.status = LoyaltyStatus::for_reservation_count(self.reservation_count);
        self.discount = self.status.discount();
    }

    pub fn register_reservation(&mut self) {
        self.reservation_count += 1;
        self.recompute_tier();
    }

    /// Never drops the count below zero
    pub fn release_reservation(&mut self) {
        self.reservation_count -= 1;
        self.recompute_tier();
    }
}
