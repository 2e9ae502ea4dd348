pub mod app_config;
pub mod database;
pub mod hotel_repo;
pub mod loyalty_repo;
pub mod memory;
pub mod payment_repo;
pub mod reservation_repo;

pub use app_config::Config;
pub use database::DbClient;
pub use hotel_repo::StoreHotelRepository;
pub use loyalty_repo::StoreLoyaltyRepository;
pub use payment_repo::StorePaymentRepository;
pub use reservation_repo::StoreReservationRepository;

use hearth_core::{CoreError, CoreResult};

pub(crate) fn storage_error(err: sqlx::Error) -> CoreError {
    CoreError::Storage(err.to_string())
}

/// Row offset of a 1-based page. Out-of-range pages are rejected.
pub(crate) fn page_offset(page: i64, size: i64) -> CoreResult<i64> {
    if page <= 0 || size <= 0 {
        return Err(CoreError::InvalidParameters(format!("invalid page {} / size {}", page, size)));
    }
    (page - 1)
        .checked_mul(size)
        .ok_or_else(|| CoreError::InvalidParameters(format!("page {} of size {} is out of range", page, size)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 10).unwrap(), 0);
        assert_eq!(page_offset(3, 2).unwrap(), 4);
        assert!(matches!(page_offset(0, 10), Err(CoreError::InvalidParameters(_))));
        assert!(matches!(page_offset(1, 0), Err(CoreError::InvalidParameters(_))));
        assert!(matches!(page_offset(i64::MAX, 2), Err(CoreError::InvalidParameters(_))));
    }
}
