//! Gateway orchestrator.
//!
//! Turns one client request into a sequence of calls against the
//! reservation, payment and loyalty services and aggregates the results
//! into client-facing views. The two write operations run as sagas over
//! independently owned stores with no shared transaction.

use std::sync::Arc;

use hearth_shared::views::{
    CreateReservationRequest, CreateReservationResponse, LoyaltyInfoResponse, PaginationResponse,
    ReservationResponse, UserInfoResponse,
};
use hearth_shared::{BookingStatus, Hotel, Loyalty, Payment, Reservation};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::fanout::fan_out;
use crate::pricing::stay_price;
use crate::saga::{Compensation, SagaLog};
use crate::upstream::{LoyaltyClient, PaymentClient, ReservationClient};
use crate::validation::validate_create_reservation;
use crate::{CoreError, CoreResult};

// ============================================================================
// Options
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayOptions {
    /// Max in-flight hotel/payment lookups while assembling reservation lists
    pub fetch_concurrency: usize,
    /// Undo completed saga steps when a later step fails
    pub compensate_failed_sagas: bool,
}

impl Default for GatewayOptions {
    fn default() -> Self {
        Self {
            fetch_concurrency: 1,
            compensate_failed_sagas: false,
        }
    }
}

/// Outcome of a hotel listing; an empty page is not an error
#[derive(Debug, Clone, PartialEq)]
pub enum HotelListing {
    Empty,
    Page(PaginationResponse),
}

// ============================================================================
// Orchestrator
// ============================================================================

#[derive(Clone)]
pub struct GatewayService {
    reservations: Arc<dyn ReservationClient>,
    payments: Arc<dyn PaymentClient>,
    loyalty: Arc<dyn LoyaltyClient>,
    options: GatewayOptions,
}

impl GatewayService {
    pub fn new(
        reservations: Arc<dyn ReservationClient>,
        payments: Arc<dyn PaymentClient>,
        loyalty: Arc<dyn LoyaltyClient>,
        options: GatewayOptions,
    ) -> Self {
        Self {
            reservations,
            payments,
            loyalty,
            options,
        }
    }

    pub async fn read_paginated_hotels(&self, page: i64, size: i64) -> CoreResult<HotelListing> {
        if page < 1 || size < 1 {
            return Err(CoreError::InvalidParameters(format!(
                "page and size must be at least 1, got page={} size={}",
                page, size
            )));
        }

        let listing = self.reservations.list_hotels(page, size).await?;
        if listing.is_empty() {
            debug!(page, size, "Hotel page is empty");
            return Ok(HotelListing::Empty);
        }
        Ok(HotelListing::Page(PaginationResponse::from(&listing)))
    }

    /// Reservations plus loyalty summary. A user with no loyalty record
    /// gets the zero-valued summary.
    pub async fn read_user_info(&self, username: &str) -> CoreResult<UserInfoResponse> {
        let username = require_username(username)?;
        let reservations = self.reservation_views(username).await?;

        let loyalty = match self.loyalty.get_loyalty(username).await {
            Ok(loyalty) => LoyaltyInfoResponse::from(&loyalty),
            Err(e) if e.is_not_found() => {
                debug!(username, "No loyalty record, using zero summary");
                LoyaltyInfoResponse::default()
            }
            Err(e) => return Err(e),
        };

        Ok(UserInfoResponse { reservations, loyalty })
    }

    pub async fn read_user_reservations(&self, username: &str) -> CoreResult<Vec<ReservationResponse>> {
        let username = require_username(username)?;
        self.reservation_views(username).await
    }

    /// Booking saga: charge, store the reservation, then bump loyalty.
    pub async fn create_reservation(
        &self,
        username: &str,
        request: &CreateReservationRequest,
    ) -> CoreResult<CreateReservationResponse> {
        // 1. Validate before touching any backing service
        let username = require_username(username)?;
        let stay = validate_create_reservation(request).map_err(CoreError::Validation)?;

        // 2. Hotel must exist
        let hotel = self.reservations.get_hotel_by_uid(stay.hotel_uid).await?;

        // 3. Current loyalty; a first-time guest starts with no discount
        let existing = match self.loyalty.get_loyalty(username).await {
            Ok(loyalty) => Some(loyalty),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };
        let discount = existing.as_ref().map(|l| l.discount).unwrap_or(0);
        let mut loyalty = existing.unwrap_or_else(|| Loyalty::new(username));

        // 4. Price
        let price = stay_price(stay.nights(), hotel.price, discount)?;
        debug!(
            username,
            hotel_uid = %hotel.uid,
            nights = stay.nights(),
            nightly = hotel.price,
            discount,
            price,
            "Priced stay"
        );

        let mut saga = SagaLog::new("create_reservation");

        // 5. Payment
        let payment = self.payments.create_payment(price).await?;
        saga.record("payment_created", Compensation::CancelPayment(payment.clone()));

        // 6. Reservation
        let draft = Reservation::draft(
            username,
            payment.uid,
            hotel.id,
            payment.status,
            stay.start_date,
            stay.end_date,
        );
        let reservation = self
            .settle(&saga, self.reservations.create_reservation(&draft).await)
            .await?;
        saga.record("reservation_created", Compensation::CancelReservation(reservation.clone()));

        // 7. Loyalty
        loyalty.register_reservation();
        self.settle(&saga, self.loyalty.update_loyalty(&loyalty).await).await?;

        info!(
            username,
            reservation_uid = %reservation.uid,
            payment_uid = %payment.uid,
            price,
            "Reservation created"
        );

        Ok(CreateReservationResponse::assemble(&reservation, hotel.uid, discount, &payment))
    }

    pub async fn read_reservation(&self, reservation_uid: &str, username: &str) -> CoreResult<ReservationResponse> {
        let username = require_username(username)?;
        let uid = parse_uid(reservation_uid)?;
        let reservation = self.owned_reservation(uid, username).await?;

        let hotel = self.reservations.get_hotel_by_id(reservation.hotel_id).await?;
        let payment = self.payments.get_payment(reservation.payment_uid).await?;
        Ok(ReservationResponse::assemble(&reservation, &hotel, &payment))
    }

    /// Cancellation saga: reservation, then payment, then loyalty.
    /// Cancelling an already canceled reservation changes nothing.
    pub async fn delete_reservation(&self, reservation_uid: &str, username: &str) -> CoreResult<()> {
        let username = require_username(username)?;
        let uid = parse_uid(reservation_uid)?;

        // 1. Ownership-checked fetch
        let mut reservation = self.owned_reservation(uid, username).await?;
        if reservation.status == BookingStatus::Canceled {
            info!(username, reservation_uid = %uid, "Reservation already canceled");
            return Ok(());
        }

        let mut saga = SagaLog::new("cancel_reservation");

        // 2. Reservation
        let previous = reservation.clone();
        reservation.cancel();
        self.reservations.update_reservation(&reservation).await?;
        saga.record("reservation_canceled", Compensation::RestoreReservation(previous));

        // 3. Payment
        let mut payment = self
            .settle(&saga, self.payments.get_payment(reservation.payment_uid).await)
            .await?;
        let previous = payment.clone();
        payment.cancel();
        self.settle(&saga, self.payments.update_payment(&payment).await).await?;
        saga.record("payment_canceled", Compensation::RestorePayment(previous));

        // 4. Loyalty
        let mut loyalty = self.settle(&saga, self.loyalty.get_loyalty(username).await).await?;
        loyalty.release_reservation();
        self.settle(&saga, self.loyalty.update_loyalty(&loyalty).await).await?;

        info!(
            username,
            reservation_uid = %uid,
            payment_uid = %payment.uid,
            "Reservation canceled"
        );
        Ok(())
    }

    pub async fn read_user_loyalty(&self, username: &str) -> CoreResult<LoyaltyInfoResponse> {
        let username = require_username(username)?;
        let loyalty = self.loyalty.get_loyalty(username).await?;
        Ok(LoyaltyInfoResponse::from(&loyalty))
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn owned_reservation(&self, uid: Uuid, username: &str) -> CoreResult<Reservation> {
        let reservation = self.reservations.get_reservation(uid).await?;
        if !reservation.is_owned_by(username) {
            warn!(username, reservation_uid = %uid, "Reservation belongs to another user");
            return Err(CoreError::InvalidParameters(format!(
                "reservation {} does not belong to {}",
                uid, username
            )));
        }
        Ok(reservation)
    }

    /// Every reservation of `username` joined with its hotel and payment
    async fn reservation_views(&self, username: &str) -> CoreResult<Vec<ReservationResponse>> {
        let reservations = self.reservations.list_reservations(username).await?;
        if reservations.is_empty() {
            return Ok(Vec::new());
        }

        let concurrency = self.options.fetch_concurrency;

        let hotel_ids: Vec<i32> = reservations.iter().map(|r| r.hotel_id).collect();
        let hotels: Vec<Hotel> = fan_out(hotel_ids, concurrency, |id| {
            let client = self.reservations.clone();
            async move { client.get_hotel_by_id(id).await }
        })
        .await?;

        let payment_uids: Vec<Uuid> = reservations.iter().map(|r| r.payment_uid).collect();
        let payments: Vec<Payment> = fan_out(payment_uids, concurrency, |uid| {
            let client = self.payments.clone();
            async move { client.get_payment(uid).await }
        })
        .await?;

        Ok(reservations
            .iter()
            .zip(hotels.iter())
            .zip(payments.iter())
            .map(|((reservation, hotel), payment)| ReservationResponse::assemble(reservation, hotel, payment))
            .collect())
    }

    /// Pass `result` through, unwinding the saga first when it failed
    async fn settle<T>(&self, saga: &SagaLog, result: CoreResult<T>) -> CoreResult<T> {
        if let Err(e) = &result {
            error!(saga = saga.saga(), error = %e, "Saga step failed");
            self.unwind(saga).await;
        }
        result
    }

    async fn unwind(&self, saga: &SagaLog) {
        if saga.is_empty() {
            return;
        }

        if !self.options.compensate_failed_sagas {
            warn!(
                saga = saga.saga(),
                steps = ?saga.step_names(),
                "Saga aborted, completed steps left in place"
            );
            return;
        }

        for step in saga.unwind_order() {
            match self.compensate(&step.compensation).await {
                Ok(()) => info!(saga = saga.saga(), step = step.name, "Compensated: {}", step.compensation.describe()),
                Err(e) => error!(
                    saga = saga.saga(),
                    step = step.name,
                    error = %e,
                    "Compensation failed: {}",
                    step.compensation.describe()
                ),
            }
        }
    }

    async fn compensate(&self, compensation: &Compensation) -> CoreResult<()> {
        match compensation {
            Compensation::CancelPayment(payment) => {
                let mut payment = payment.clone();
                payment.cancel();
                self.payments.update_payment(&payment).await
            }
            Compensation::CancelReservation(reservation) => {
                let mut reservation = reservation.clone();
                reservation.cancel();
                self.reservations.update_reservation(&reservation).await
            }
            Compensation::RestoreReservation(reservation) => self.reservations.update_reservation(reservation).await,
            Compensation::RestorePayment(payment) => self.payments.update_payment(payment).await,
        }
    }
}

fn require_username(username: &str) -> CoreResult<&str> {
    let username = username.trim();
    if username.is_empty() {
        return Err(CoreError::InvalidParameters("username is required".to_string()));
    }
    Ok(username)
}

fn parse_uid(raw: &str) -> CoreResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| CoreError::InvalidParameters(format!("invalid uid: {}", raw)))
}
