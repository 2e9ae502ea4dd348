use async_trait::async_trait;
use hearth_core::repository::HotelRepository;
use hearth_core::CoreResult;
use hearth_shared::Hotel;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{page_offset, storage_error};

pub struct StoreHotelRepository {
    pool: PgPool,
}

impl StoreHotelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct HotelRow {
    id: i32,
    hotel_uid: Uuid,
    name: String,
    country: String,
    city: String,
    address: String,
    stars: Option<i32>,
    price: i32,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Hotel {
            id: row.id,
            uid: row.hotel_uid,
            name: row.name,
            country: row.country,
            city: row.city,
            address: row.address,
            stars: row.stars.unwrap_or(0),
            price: row.price,
        }
    }
}

const HOTEL_COLUMNS: &str = "id, hotel_uid, name, country, city, address, stars, price";

#[async_trait]
impl HotelRepository for StoreHotelRepository {
    async fn get_paginated(&self, page: i64, size: i64) -> CoreResult<Vec<Hotel>> {
        let offset = page_offset(page, size)?;
        let rows = sqlx::query_as::<_, HotelRow>(&format!(
            "SELECT {} FROM hotels ORDER BY id LIMIT $1 OFFSET $2",
            HOTEL_COLUMNS
        ))
        .bind(size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn count(&self) -> CoreResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM hotels")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)
    }

    async fn get_by_id(&self, id: i32) -> CoreResult<Option<Hotel>> {
        let row = sqlx::query_as::<_, HotelRow>(&format!("SELECT {} FROM hotels WHERE id = $1", HOTEL_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(row.map(Hotel::from))
    }

    async fn get_by_uid(&self, uid: Uuid) -> CoreResult<Option<Hotel>> {
        let row = sqlx::query_as::<_, HotelRow>(&format!(
            "SELECT {} FROM hotels WHERE hotel_uid = $1",
            HOTEL_COLUMNS
        ))
        .bind(uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(Hotel::from))
    }
}
