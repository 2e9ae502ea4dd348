use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A hotel in the catalogue owned by the reservation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i32,
    #[serde(rename = "hotelUid")]
    pub uid: Uuid,
    pub name: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub stars: i32,
    /// Price of one night
    pub price: i32,
}

impl Hotel {
    pub fn full_address(&self) -> String {
        format!("{}, {}, {}", self.country, self.city, self.address)
    }
}

/// One page of the hotel catalogue as served by the reservation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HotelPage {
    pub page: i64,
    pub page_size: i64,
    pub total_elements: i64,
    pub items: Vec<Hotel>,
}

impl HotelPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
