//! In-memory store adapters for running a service without Postgres.
//!
//! Ids are assigned from a per-table counter the way a SERIAL column would.

use async_trait::async_trait;
use hearth_core::repository::{HotelRepository, LoyaltyRepository, PaymentRepository, ReservationRepository};
use hearth_core::{CoreError, CoreResult};
use hearth_shared::{Hotel, Loyalty, Payment, Reservation};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::page_offset;

pub const DEMO_HOTEL_UID: Uuid = Uuid::from_u128(0x049161bb_badd_4fa8_9d90_87c9a82b0668);

/// The hotel the reservation migration seeds, for parity in memory mode
pub fn demo_hotel() -> Hotel {
    Hotel {
        id: 1,
        uid: DEMO_HOTEL_UID,
        name: "Ararat Park Hyatt Moscow".to_string(),
        country: "Россия".to_string(),
        city: "Москва".to_string(),
        address: "Неглинная ул., 4".to_string(),
        stars: 5,
        price: 10000,
    }
}

// ============================================================================
// Hotels
// ============================================================================

pub struct InMemoryHotelRepository {
    hotels: RwLock<Vec<Hotel>>,
}

impl InMemoryHotelRepository {
    pub fn new(mut hotels: Vec<Hotel>) -> Self {
        hotels.sort_by_key(|h| h.id);
        Self {
            hotels: RwLock::new(hotels),
        }
    }

    pub fn seeded() -> Self {
        Self::new(vec![demo_hotel()])
    }
}

#[async_trait]
impl HotelRepository for InMemoryHotelRepository {
    async fn get_paginated(&self, page: i64, size: i64) -> CoreResult<Vec<Hotel>> {
        let offset = usize::try_from(page_offset(page, size)?).unwrap_or(usize::MAX);
        let hotels = self.hotels.read().await;
        let limit = usize::try_from(size).unwrap_or(usize::MAX);
        Ok(hotels.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn count(&self) -> CoreResult<i64> {
        Ok(self.hotels.read().await.len() as i64)
    }

    async fn get_by_id(&self, id: i32) -> CoreResult<Option<Hotel>> {
        Ok(self.hotels.read().await.iter().find(|h| h.id == id).cloned())
    }

    async fn get_by_uid(&self, uid: Uuid) -> CoreResult<Option<Hotel>> {
        Ok(self.hotels.read().await.iter().find(|h| h.uid == uid).cloned())
    }
}

// ============================================================================
// Reservations
// ============================================================================

struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct InMemoryReservationRepository {
    table: RwLock<Table<Reservation>>,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn get_by_username(&self, username: &str) -> CoreResult<Vec<Reservation>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().filter(|r| r.username == username).cloned().collect())
    }

    async fn get_by_uid(&self, uid: Uuid) -> CoreResult<Option<Reservation>> {
        Ok(self.table.read().await.rows.iter().find(|r| r.uid == uid).cloned())
    }

    async fn insert(&self, reservation: &Reservation) -> CoreResult<Reservation> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|r| r.uid == reservation.uid) {
            return Err(CoreError::Storage(format!("duplicate reservation uid {}", reservation.uid)));
        }
        let mut stored = reservation.clone();
        stored.id = table.allocate_id();
        table.rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, reservation: &Reservation) -> CoreResult<Option<Reservation>> {
        let mut table = self.table.write().await;
        Ok(table.rows.iter_mut().find(|r| r.uid == reservation.uid).map(|slot| {
            let id = slot.id;
            *slot = Reservation {
                id,
                ..reservation.clone()
            };
            slot.clone()
        }))
    }
}

// ============================================================================
// Payments
// ============================================================================

#[derive(Default)]
pub struct InMemoryPaymentRepository {
    payments: RwLock<HashMap<Uuid, Payment>>,
    next_id: RwLock<i32>,
}

impl InMemoryPaymentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn get_by_uid(&self, uid: Uuid) -> CoreResult<Option<Payment>> {
        Ok(self.payments.read().await.get(&uid).cloned())
    }

    async fn insert(&self, payment: &Payment) -> CoreResult<Payment> {
        let mut payments = self.payments.write().await;
        if payments.contains_key(&payment.uid) {
            return Err(CoreError::Storage(format!("duplicate payment uid {}", payment.uid)));
        }
        let mut next_id = self.next_id.write().await;
        *next_id += 1;

        let stored = Payment {
            id: *next_id,
            ..payment.clone()
        };
        payments.insert(stored.uid, stored.clone());
        Ok(stored)
    }

    async fn update(&self, payment: &Payment) -> CoreResult<Option<Payment>> {
        let mut payments = self.payments.write().await;
        Ok(payments.get_mut(&payment.uid).map(|slot| {
            slot.status = payment.status;
            slot.price = payment.price;
            slot.clone()
        }))
    }
}

// ============================================================================
// Loyalty
// ============================================================================

#[derive(Default)]
pub struct InMemoryLoyaltyRepository {
    table: RwLock<Table<Loyalty>>,
}

impl InMemoryLoyaltyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoyaltyRepository for InMemoryLoyaltyRepository {
    async fn get_by_username(&self, username: &str) -> CoreResult<Option<Loyalty>> {
        Ok(self.table.read().await.rows.iter().find(|l| l.username == username).cloned())
    }

    async fn insert(&self, loyalty: &Loyalty) -> CoreResult<Loyalty> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|l| l.username == loyalty.username) {
            return Err(CoreError::Storage(format!("duplicate loyalty username {}", loyalty.username)));
        }
        let mut stored = loyalty.clone();
        stored.id = table.allocate_id();
        table.rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, loyalty: &Loyalty) -> CoreResult<Option<Loyalty>> {
        let mut table = self.table.write().await;
        Ok(table.rows.iter_mut().find(|l| l.username == loyalty.username).map(|slot| {
            slot.reservation_count = loyalty.reservation_count;
            slot.status = loyalty.status;
            slot.discount = loyalty.discount;
            slot.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hotel_pages() {
        let hotels: Vec<Hotel> = (1..=5)
            .map(|id| Hotel {
                id,
                uid: Uuid::new_v4(),
                ..demo_hotel()
            })
            .collect();
        let repo = InMemoryHotelRepository::new(hotels);

        let ids: Vec<i32> = repo.get_paginated(2, 2).await.unwrap().iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(repo.get_paginated(3, 2).await.unwrap().len(), 1);
        assert!(repo.get_paginated(4, 2).await.unwrap().is_empty());
        assert_eq!(repo.count().await.unwrap(), 5);
        assert!(matches!(
            repo.get_paginated(i64::MAX, 2).await,
            Err(CoreError::InvalidParameters(_))
        ));
    }

    #[tokio::test]
    async fn test_demo_hotel_uid() {
        let repo = InMemoryHotelRepository::seeded();
        let hotel = repo
            .get_by_uid(Uuid::parse_str("049161bb-badd-4fa8-9d90-87c9a82b0668").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(hotel.price, 10000);
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let repo = InMemoryPaymentRepository::new();
        let first = repo.insert(&Payment::paid(10)).await.unwrap();
        let second = repo.insert(&Payment::paid(20)).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        let mut changed = second.clone();
        changed.id = 99;
        changed.cancel();
        let updated = repo.update(&changed).await.unwrap().unwrap();
        assert_eq!(updated.id, 2);
        assert!(repo.update(&Payment::paid(1)).await.unwrap().is_none());
        assert!(repo.insert(&first).await.is_err());
    }
}
