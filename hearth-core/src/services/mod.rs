pub mod loyalty;
pub mod payment;
pub mod reservation;

pub use loyalty::LoyaltyService;
pub use payment::PaymentService;
pub use reservation::ReservationService;
