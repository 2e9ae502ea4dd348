mod hotel;
mod loyalty;
mod payment;
mod reservation;

pub use hotel::{Hotel, HotelPage};
pub use loyalty::{Loyalty, LoyaltyStatus};
pub use payment::Payment;
pub use reservation::Reservation;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status shared by a reservation and the payment backing it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Paid,
    Canceled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Paid => "PAID",
            BookingStatus::Canceled => "CANCELED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PAID" => Ok(BookingStatus::Paid),
            "CANCELED" => Ok(BookingStatus::Canceled),
            other => Err(format!("unknown booking status: {}", other)),
        }
    }
}
