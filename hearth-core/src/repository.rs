use async_trait::async_trait;
use hearth_shared::{Hotel, Loyalty, Payment, Reservation};
use uuid::Uuid;

use crate::CoreResult;

/// Hotel catalogue owned by the reservation service
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// `page` is 1-based
    async fn get_paginated(&self, page: i64, size: i64) -> CoreResult<Vec<Hotel>>;

    async fn count(&self) -> CoreResult<i64>;

    async fn get_by_id(&self, id: i32) -> CoreResult<Option<Hotel>>;

    async fn get_by_uid(&self, uid: Uuid) -> CoreResult<Option<Hotel>>;
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn get_by_username(&self, username: &str) -> CoreResult<Vec<Reservation>>;

    async fn get_by_uid(&self, uid: Uuid) -> CoreResult<Option<Reservation>>;

    /// Persist a new reservation and return it with its assigned id
    async fn insert(&self, reservation: &Reservation) -> CoreResult<Reservation>;

    /// Update the row matching `reservation.uid`; `None` when no such row exists
    async fn update(&self, reservation: &Reservation) -> CoreResult<Option<Reservation>>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn get_by_uid(&self, uid: Uuid) -> CoreResult<Option<Payment>>;

    async fn insert(&self, payment: &Payment) -> CoreResult<Payment>;

    async fn update(&self, payment: &Payment) -> CoreResult<Option<Payment>>;
}

#[async_trait]
pub trait LoyaltyRepository: Send + Sync {
    async fn get_by_username(&self, username: &str) -> CoreResult<Option<Loyalty>>;

    async fn insert(&self, loyalty: &Loyalty) -> CoreResult<Loyalty>;

    /// Update the row matching `loyalty.username`
    async fn update(&self, loyalty: &Loyalty) -> CoreResult<Option<Loyalty>>;
}
