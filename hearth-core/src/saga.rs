//! Step log for the gateway's multi-service write sagas.
//!
//! Every mutating step that completes is recorded together with the
//! action that would undo it. On failure the log is either reported
//! (steps left behind) or unwound in reverse order.

use hearth_shared::{Payment, Reservation};

/// Action that semantically undoes a completed saga step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compensation {
    /// Mark a freshly created payment CANCELED
    CancelPayment(Payment),
    /// Mark a freshly created reservation CANCELED
    CancelReservation(Reservation),
    /// Push the reservation back as it was before the saga touched it
    RestoreReservation(Reservation),
    /// Push the payment back as it was before the saga touched it
    RestorePayment(Payment),
}

impl Compensation {
    pub fn describe(&self) -> String {
        match self {
            Compensation::CancelPayment(p) => format!("cancel payment {}", p.uid),
            Compensation::CancelReservation(r) => format!("cancel reservation {}", r.uid),
            Compensation::RestoreReservation(r) => format!("restore reservation {} to {}", r.uid, r.status),
            Compensation::RestorePayment(p) => format!("restore payment {} to {}", p.uid, p.status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SagaStep {
    pub name: &'static str,
    pub compensation: Compensation,
}

#[derive(Debug, Clone)]
pub struct SagaLog {
    saga: &'static str,
    steps: Vec<SagaStep>,
}

impl SagaLog {
    pub fn new(saga: &'static str) -> Self {
        Self {
            saga,
            steps: Vec::new(),
        }
    }

    pub fn saga(&self) -> &'static str {
        self.saga
    }

    pub fn record(&mut self, name: &'static str, compensation: Compensation) {
        self.steps.push(SagaStep { name, compensation });
    }

    /// Completed steps in execution order
    pub fn steps(&self) -> &[SagaStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Completed steps, most recent first
    pub fn unwind_order(&self) -> impl Iterator<Item = &SagaStep> {
        self.steps.iter().rev()
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hearth_shared::BookingStatus;

    #[test]
    fn test_unwinds_in_reverse() {
        let payment = Payment::paid(270);
        let reservation = Reservation::draft(
            "alice",
            payment.uid,
            1,
            BookingStatus::Paid,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
        );

        let mut log = SagaLog::new("create_reservation");
        assert!(log.is_empty());
        log.record("payment_created", Compensation::CancelPayment(payment.clone()));
        log.record("reservation_created", Compensation::CancelReservation(reservation.clone()));

        assert_eq!(log.step_names(), vec!["payment_created", "reservation_created"]);
        let unwound: Vec<_> = log.unwind_order().map(|s| s.name).collect();
        assert_eq!(unwound, vec!["reservation_created", "payment_created"]);
        assert_eq!(log.steps()[0].compensation, Compensation::CancelPayment(payment));
    }

    #[test]
    fn test_describe() {
        let payment = Payment::paid(10);
        let uid = payment.uid;
        assert_eq!(
            Compensation::RestorePayment(payment).describe(),
            format!("restore payment {} to PAID", uid)
        );
    }
}
