use chrono::NaiveDate;

use crate::{CoreError, CoreResult};

/// Whole nights between check-in and check-out
pub fn nights_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Total price of a stay after the loyalty discount (a percentage).
///
/// The discount is applied to the full stay and rounded half away from zero.
pub fn stay_price(nights: i64, nightly_price: i32, discount: i32) -> CoreResult<i32> {
    if nights < 0 {
        return Err(CoreError::InvalidParameters(format!(
            "negative stay length: {} nights",
            nights
        )));
    }

    let raw = nights
        .checked_mul(i64::from(nightly_price))
        .ok_or_else(|| CoreError::InvalidParameters("stay price overflows".to_string()))?;

    let total = if discount > 0 {
        (raw as f64 * (1.0 - f64::from(discount) / 100.0)).round() as i64
    } else {
        raw
    };

    i32::try_from(total).map_err(|_| CoreError::InvalidParameters(format!("stay price {} out of range", total)))
}
