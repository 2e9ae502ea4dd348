pub mod models;
pub mod views;

pub use models::{BookingStatus, Hotel, HotelPage, Loyalty, LoyaltyStatus, Payment, Reservation};

/// Header carrying the caller's identity between every hop.
pub const USER_HEADER: &str = "X-User-Name";
