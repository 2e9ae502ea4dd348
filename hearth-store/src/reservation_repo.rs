use async_trait::async_trait;
use chrono::NaiveDate;
use hearth_core::repository::ReservationRepository;
use hearth_core::{CoreError, CoreResult};
use hearth_shared::{BookingStatus, Reservation};
use sqlx::PgPool;
use uuid::Uuid;

use crate::storage_error;

pub struct StoreReservationRepository {
    pool: PgPool,
}

impl StoreReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ReservationRow {
    id: i32,
    reservation_uid: Uuid,
    username: String,
    payment_uid: Uuid,
    hotel_id: Option<i32>,
    status: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = CoreError;

    fn try_from(row: ReservationRow) -> Result<Self, Self::Error> {
        Ok(Reservation {
            id: row.id,
            uid: row.reservation_uid,
            username: row.username,
            payment_uid: row.payment_uid,
            hotel_id: row.hotel_id.unwrap_or_default(),
            status: row.status.parse::<BookingStatus>().map_err(CoreError::Storage)?,
            start_date: row.start_date,
            end_date: row.end_date,
        })
    }
}

const RESERVATION_COLUMNS: &str =
    "id, reservation_uid, username, payment_uid, hotel_id, status, start_date, end_date";

#[async_trait]
impl ReservationRepository for StoreReservationRepository {
    async fn get_by_username(&self, username: &str) -> CoreResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(&format!(
            "SELECT {} FROM reservation WHERE username = $1 ORDER BY id",
            RESERVATION_COLUMNS
        ))
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        rows.into_iter().map(Reservation::try_from).collect()
    }

    async fn get_by_uid(&self, uid: Uuid) -> CoreResult<Option<Reservation>> {
        let row = sqlx::query_as::<_, ReservationRow>(&format!(
            "SELECT {} FROM reservation WHERE reservation_uid = $1",
            RESERVATION_COLUMNS
        ))
        .bind(uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.map(Reservation::try_from).transpose()
    }

    async fn insert(&self, reservation: &Reservation) -> CoreResult<Reservation> {
        let row = sqlx::query_as::<_, ReservationRow>(&format!(
            "INSERT INTO reservation (reservation_uid, username, payment_uid, hotel_id, status, start_date, end_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            RESERVATION_COLUMNS
        ))
        .bind(reservation.uid)
        .bind(&reservation.username)
        .bind(reservation.payment_uid)
        .bind(reservation.hotel_id)
        .bind(reservation.status.as_str())
        .bind(reservation.start_date)
        .bind(reservation.end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        Reservation::try_from(row)
    }

    async fn update(&self, reservation: &Reservation) -> CoreResult<Option<Reservation>> {
        let row = sqlx::query_as::<_, ReservationRow>(&format!(
            "UPDATE reservation SET username = $2, payment_uid = $3, hotel_id = $4, status = $5, \
             start_date = $6, end_date = $7 WHERE reservation_uid = $1 RETURNING {}",
            RESERVATION_COLUMNS
        ))
        .bind(reservation.uid)
        .bind(&reservation.username)
        .bind(reservation.payment_uid)
        .bind(reservation.hotel_id)
        .bind(reservation.status.as_str())
        .bind(reservation.start_date)
        .bind(reservation.end_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.map(Reservation::try_from).transpose()
    }
}
