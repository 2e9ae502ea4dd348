use hearth_core::gateway::GatewayService;
use hearth_core::services::{LoyaltyService, PaymentService, ReservationService};

#[derive(Clone)]
pub struct GatewayState {
    pub gateway: GatewayService,
}

#[derive(Clone)]
pub struct ReservationState {
    pub service: ReservationService,
}

#[derive(Clone)]
pub struct PaymentState {
    pub service: PaymentService,
}

#[derive(Clone)]
pub struct LoyaltyState {
    pub service: LoyaltyService,
}
