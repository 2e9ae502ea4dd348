use std::sync::Arc;

use hearth_shared::{Hotel, HotelPage, Reservation};
use tracing::{debug, info};
use uuid::Uuid;

use crate::repository::{HotelRepository, ReservationRepository};
use crate::{CoreError, CoreResult};

/// Business logic of the reservation service: hotel catalogue and bookings
#[derive(Clone)]
pub struct ReservationService {
    hotels: Arc<dyn HotelRepository>,
    reservations: Arc<dyn ReservationRepository>,
}

impl ReservationService {
    pub fn new(hotels: Arc<dyn HotelRepository>, reservations: Arc<dyn ReservationRepository>) -> Self {
        Self { hotels, reservations }
    }

    pub async fn read_paginated_hotels(&self, page: i64, size: i64) -> CoreResult<HotelPage> {
        if page <= 0 || size <= 0 {
            return Err(CoreError::InvalidParameters(format!(
                "page and size must be positive, got page={} size={}",
                page, size
            )));
        }

        let items = self.hotels.get_paginated(page, size).await?;
        let total_elements = self.hotels.count().await?;
        debug!(page, size, returned = items.len(), total_elements, "Listed hotels");

        Ok(HotelPage {
            page,
            page_size: size,
            total_elements,
            items,
        })
    }

    pub async fn read_hotel_by_id(&self, id: i32) -> CoreResult<Hotel> {
        self.hotels
            .get_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("hotel with id {}", id)))
    }

    pub async fn read_hotel_by_uid(&self, uid: Uuid) -> CoreResult<Hotel> {
        self.hotels
            .get_by_uid(uid)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("hotel {}", uid)))
    }

    /// An unknown user simply has no reservations
    pub async fn read_reservations_by_username(&self, username: &str) -> CoreResult<Vec<Reservation>> {
        self.reservations.get_by_username(username).await
    }

    pub async fn read_reservation_by_uid(&self, uid: Uuid) -> CoreResult<Reservation> {
        self.reservations
            .get_by_uid(uid)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("reservation {}", uid)))
    }

    pub async fn create_reservation(&self, mut reservation: Reservation) -> CoreResult<Reservation> {
        if reservation.username.trim().is_empty() {
            return Err(CoreError::InvalidParameters("username is required".to_string()));
        }
        if reservation.start_date > reservation.end_date {
            return Err(CoreError::InvalidParameters(format!(
                "start date {} is after end date {}",
                reservation.start_date, reservation.end_date
            )));
        }
        if reservation.uid.is_nil() {
            reservation.uid = Uuid::new_v4();
        }

        let created = self.reservations.insert(&reservation).await?;
        info!(
            reservation_uid = %created.uid,
            username = %created.username,
            hotel_id = created.hotel_id,
            "Reservation stored"
        );
        Ok(created)
    }

    pub async fn update_reservation(&self, reservation: &Reservation) -> CoreResult<Reservation> {
        let updated = self
            .reservations
            .update(reservation)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("reservation {}", reservation.uid)))?;
        info!(reservation_uid = %updated.uid, status = %updated.status, "Reservation updated");
        Ok(updated)
    }
}
