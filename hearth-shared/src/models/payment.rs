use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::BookingStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default)]
    pub id: i32,
    #[serde(rename = "paymentUid")]
    pub uid: Uuid,
    pub status: BookingStatus,
    pub price: i32,
}

impl Payment {
    /// A freshly charged payment, not yet persisted
    pub fn paid(price: i32) -> Self {
        Self {
            id: 0,
            uid: Uuid::new_v4(),
            status: BookingStatus::Paid,
            price,
        }
    }

    pub fn cancel(&mut self) {
        self.status = BookingStatus::Canceled;
    }
}
