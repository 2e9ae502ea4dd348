//! Ports the gateway uses to reach the three backing services.
//!
//! Implementations must report a missing entity as `CoreError::NotFound`
//! and every other failure (transport, undecodable body, non-2xx status)
//! as `CoreError::Upstream`.

use async_trait::async_trait;
use hearth_shared::{Hotel, HotelPage, Loyalty, Payment, Reservation};
use uuid::Uuid;

use crate::CoreResult;

#[async_trait]
pub trait ReservationClient: Send + Sync {
    async fn list_hotels(&self, page: i64, size: i64) -> CoreResult<HotelPage>;

    async fn get_hotel_by_id(&self, id: i32) -> CoreResult<Hotel>;

    async fn get_hotel_by_uid(&self, uid: Uuid) -> CoreResult<Hotel>;

    /// All reservations of `username`; an unknown user yields an empty list
    async fn list_reservations(&self, username: &str) -> CoreResult<Vec<Reservation>>;

    async fn get_reservation(&self, uid: Uuid) -> CoreResult<Reservation>;

    async fn create_reservation(&self, reservation: &Reservation) -> CoreResult<Reservation>;

    async fn update_reservation(&self, reservation: &Reservation) -> CoreResult<()>;
}

#[async_trait]
pub trait PaymentClient: Send + Sync {
    /// Charge `price`; the returned payment is already PAID
    async fn create_payment(&self, price: i32) -> CoreResult<Payment>;

    async fn get_payment(&self, uid: Uuid) -> CoreResult<Payment>;

    async fn update_payment(&self, payment: &Payment) -> CoreResult<()>;
}

#[async_trait]
pub trait LoyaltyClient: Send + Sync {
    async fn get_loyalty(&self, username: &str) -> CoreResult<Loyalty>;

    /// Create or replace the record for `loyalty.username`
    async fn update_loyalty(&self, loyalty: &Loyalty) -> CoreResult<Loyalty>;
}
