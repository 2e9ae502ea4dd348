use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{BookingStatus, Hotel, HotelPage, Loyalty, LoyaltyStatus, Payment, Reservation};

// ============================================================================
// Gateway requests
// ============================================================================

/// Body of `POST /api/v1/reservations`. Fields stay raw strings so that
/// malformed values surface as field-level validation errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[serde(default)]
    pub hotel_uid: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

/// Body of the payment service's `POST /api/v1/payment`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    pub price: i32,
}

// ============================================================================
// Gateway responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub hotel_uid: Uuid,
    pub name: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub stars: i32,
    pub price: i32,
}

impl From<&Hotel> for HotelResponse {
    fn from(hotel: &Hotel) -> Self {
        Self {
            hotel_uid: hotel.uid,
            name: hotel.name.clone(),
            country: hotel.country.clone(),
            city: hotel.city.clone(),
            address: hotel.address.clone(),
            stars: hotel.stars,
            price: hotel.price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse {
    pub page: i64,
    pub page_size: i64,
    pub total_elements: i64,
    pub items: Vec<HotelResponse>,
}

impl From<&HotelPage> for PaginationResponse {
    fn from(page: &HotelPage) -> Self {
        Self {
            page: page.page,
            page_size: page.page_size,
            total_elements: page.total_elements,
            items: page.items.iter().map(HotelResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelInfo {
    pub hotel_uid: Uuid,
    pub name: String,
    pub full_address: String,
    pub stars: i32,
}

impl From<&Hotel> for HotelInfo {
    fn from(hotel: &Hotel) -> Self {
        Self {
            hotel_uid: hotel.uid,
            name: hotel.name.clone(),
            full_address: hotel.full_address(),
            stars: hotel.stars,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentInfo {
    pub status: BookingStatus,
    pub price: i32,
}

impl From<&Payment> for PaymentInfo {
    fn from(payment: &Payment) -> Self {
        Self {
            status: payment.status,
            price: payment.price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_uid: Uuid,
    pub hotel: HotelInfo,
    pub start_date: String,
    pub end_date: String,
    pub status: BookingStatus,
    pub payment: PaymentInfo,
}

impl ReservationResponse {
    pub fn assemble(reservation: &Reservation, hotel: &Hotel, payment: &Payment) -> Self {
        Self {
            reservation_uid: reservation.uid,
            hotel: HotelInfo::from(hotel),
            start_date: reservation.start_date.to_string(),
            end_date: reservation.end_date.to_string(),
            status: reservation.status,
            payment: PaymentInfo::from(payment),
        }
    }
}

/// Public loyalty summary. A user without a loyalty record gets the
/// zero value: no status, no discount, no reservations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyInfoResponse {
    pub status: Option<LoyaltyStatus>,
    pub discount: i32,
    pub reservation_count: i32,
}

impl From<&Loyalty> for LoyaltyInfoResponse {
    fn from(loyalty: &Loyalty) -> Self {
        Self {
            status: Some(loyalty.status),
            discount: loyalty.discount,
            reservation_count: loyalty.reservation_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfoResponse {
    pub reservations: Vec<ReservationResponse>,
    pub loyalty: LoyaltyInfoResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationResponse {
    pub reservation_uid: Uuid,
    pub hotel_uid: Uuid,
    pub start_date: String,
    pub end_date: String,
    /// Discount percentage applied to this booking's price
    pub discount: i32,
    pub status: BookingStatus,
    pub payment: PaymentInfo,
}

impl CreateReservationResponse {
    pub fn assemble(reservation: &Reservation, hotel_uid: Uuid, discount: i32, payment: &Payment) -> Self {
        Self {
            reservation_uid: reservation.uid,
            hotel_uid,
            start_date: reservation.start_date.to_string(),
            end_date: reservation.end_date.to_string(),
            discount,
            status: reservation.status,
            payment: PaymentInfo::from(payment),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorDescription {
    pub field: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValidationErrorResponse {
    pub message: String,
    pub errors: Vec<ErrorDescription>,
}

impl ValidationErrorResponse {
    pub fn push(&mut self, field: &str, error: &str) {
        self.errors.push(ErrorDescription {
            field: field.to_string(),
            error: error.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hotel() -> Hotel {
        Hotel {
            id: 1,
            uid: Uuid::new_v4(),
            name: "Ararat Park Hyatt Moscow".to_string(),
            country: "Россия".to_string(),
            city: "Москва".to_string(),
            address: "Неглинная ул., 4".to_string(),
            stars: 5,
            price: 10000,
        }
    }

    #[test]
    fn test_hotel_info_full_address() {
        let info = HotelInfo::from(&hotel());
        assert_eq!(info.full_address, "Россия, Москва, Неглинная ул., 4");
        assert_eq!(info.stars, 5);
    }

    #[test]
    fn test_reservation_response_joins_hotel_and_payment() {
        let hotel = hotel();
        let payment = Payment::paid(270);
        let reservation = Reservation::draft(
            "alice",
            payment.uid,
            hotel.id,
            payment.status,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
        );

        let view = ReservationResponse::assemble(&reservation, &hotel, &payment);
        assert_eq!(view.hotel.hotel_uid, hotel.uid);
        assert_eq!(view.payment.price, 270);
        assert_eq!(view.start_date, "2024-01-01");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["payment"]["status"], "PAID");
        assert_eq!(json["hotel"]["fullAddress"], "Россия, Москва, Неглинная ул., 4");
    }

    #[test]
    fn test_zero_loyalty_summary_serializes_null_status() {
        let json = serde_json::to_value(LoyaltyInfoResponse::default()).unwrap();
        assert!(json["status"].is_null());
        assert_eq!(json["discount"], 0);
        assert_eq!(json["reservationCount"], 0);
    }

    #[test]
    fn test_create_request_tolerates_missing_fields() {
        let req: CreateReservationRequest = serde_json::from_str(r#"{"hotelUid": "abc"}"#).unwrap();
        assert_eq!(req.hotel_uid, "abc");
        assert!(req.start_date.is_empty());
    }
}
