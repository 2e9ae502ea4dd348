use chrono::NaiveDate;
use hearth_shared::views::{CreateReservationRequest, ValidationErrorResponse};
use uuid::Uuid;

use crate::pricing::nights_between;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const INVALID_RESERVATION_REQUEST: &str = "invalid reservation request data";

/// A reservation request whose fields have all been parsed and checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRequest {
    pub hotel_uid: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl StayRequest {
    pub fn nights(&self) -> i64 {
        nights_between(self.start_date, self.end_date)
    }
}

/// Check every field of a booking request, collecting one entry per broken rule.
pub fn validate_create_reservation(
    req: &CreateReservationRequest,
) -> Result<StayRequest, ValidationErrorResponse> {
    let mut report = ValidationErrorResponse {
        message: INVALID_RESERVATION_REQUEST.to_string(),
        errors: Vec::new(),
    };

    let hotel_uid = Uuid::parse_str(req.hotel_uid.trim()).ok();
    if hotel_uid.is_none() {
        report.push("hotelUid", "invalid uid");
    }

    let start_date = NaiveDate::parse_from_str(req.start_date.trim(), DATE_FORMAT).ok();
    if start_date.is_none() {
        report.push("startDate", "invalid date format");
    }

    let end_date = NaiveDate::parse_from_str(req.end_date.trim(), DATE_FORMAT).ok();
    if end_date.is_none() {
        report.push("endDate", "invalid date format");
    }

    if let (Some(start), Some(end)) = (start_date, end_date) {
        if start > end {
            report.push("startDate", "invalid date period");
        }
    }

    match (hotel_uid, start_date, end_date) {
        (Some(hotel_uid), Some(start_date), Some(end_date)) if report.is_empty() => Ok(StayRequest {
            hotel_uid,
            start_date,
            end_date,
        }),
        _ => Err(report),
    }
}
