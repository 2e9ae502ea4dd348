use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::BookingStatus;

/// A stay booked by `username`, linked to a hotel by internal id and to its payment by uid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(default)]
    pub id: i32,
    #[serde(rename = "reservationUid")]
    pub uid: Uuid,
    pub username: String,
    pub payment_uid: Uuid,
    pub hotel_id: i32,
    pub status: BookingStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Reservation {
    /// Build an unsaved reservation with a freshly generated uid
    pub fn draft(
        username: &str,
        payment_uid: Uuid,
        hotel_id: i32,
        status: BookingStatus,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: 0,
            uid: Uuid::new_v4(),
            username: username.to_string(),
            payment_uid,
            hotel_id,
            status,
            start_date,
            end_date,
        }
    }

    pub fn is_owned_by(&self, username: &str) -> bool {
        self.username == username
    }

    pub fn cancel(&mut self) {
        self.status = BookingStatus::Canceled;
    }
}
