//! Wiring shared by the four binaries: pick a store, build state, serve.

use std::sync::Arc;

use axum::Router;
use hearth_core::gateway::GatewayService;
use hearth_core::services::{LoyaltyService, PaymentService, ReservationService};
use hearth_store::app_config::{GatewayConfig, ServiceConfig};
use hearth_store::database::{LOYALTY_MIGRATIONS, PAYMENT_MIGRATIONS, RESERVATION_MIGRATIONS};
use hearth_store::memory::{
    InMemoryHotelRepository, InMemoryLoyaltyRepository, InMemoryPaymentRepository,
    InMemoryReservationRepository,
};
use hearth_store::{
    DbClient, StoreHotelRepository, StoreLoyaltyRepository, StorePaymentRepository,
    StoreReservationRepository,
};
use sqlx::migrate::Migrator;
use tracing::{info, warn};

use crate::state::{GatewayState, LoyaltyState, PaymentState, ReservationState};
use crate::upstream::{build_client, HttpLoyaltyClient, HttpPaymentClient, HttpReservationClient};

async fn connect(service: &str, config: &ServiceConfig, migrator: &Migrator) -> anyhow::Result<Option<DbClient>> {
    let Some(url) = config.database_url.as_deref() else {
        warn!("{} service has no database_url, using the in-memory store", service);
        return Ok(None);
    };

    let db = DbClient::new(url, config.max_connections).await?;
    if config.run_migrations {
        db.migrate(migrator).await?;
    }
    Ok(Some(db))
}

pub async fn reservation_state(config: &ServiceConfig) -> anyhow::Result<ReservationState> {
    let service = match connect("reservation", config, &RESERVATION_MIGRATIONS).await? {
        Some(db) => ReservationService::new(
            Arc::new(StoreHotelRepository::new(db.pool.clone())),
            Arc::new(StoreReservationRepository::new(db.pool)),
        ),
        None => ReservationService::new(
            Arc::new(InMemoryHotelRepository::seeded()),
            Arc::new(InMemoryReservationRepository::new()),
        ),
    };
    Ok(ReservationState { service })
}

pub async fn payment_state(config: &ServiceConfig) -> anyhow::Result<PaymentState> {
    let service = match connect("payment", config, &PAYMENT_MIGRATIONS).await? {
        Some(db) => PaymentService::new(Arc::new(StorePaymentRepository::new(db.pool))),
        None => PaymentService::new(Arc::new(InMemoryPaymentRepository::new())),
    };
    Ok(PaymentState { service })
}

pub async fn loyalty_state(config: &ServiceConfig) -> anyhow::Result<LoyaltyState> {
    let service = match connect("loyalty", config, &LOYALTY_MIGRATIONS).await? {
        Some(db) => LoyaltyService::new(Arc::new(StoreLoyaltyRepository::new(db.pool))),
        None => LoyaltyService::new(Arc::new(InMemoryLoyaltyRepository::new())),
    };
    Ok(LoyaltyState { service })
}

pub fn gateway_state(config: &GatewayConfig) -> anyhow::Result<GatewayState> {
    let client = build_client(config.upstream.timeout())?;
    let options = config.options();
    info!(
        fetch_concurrency = options.fetch_concurrency,
        compensate_failed_sagas = options.compensate_failed_sagas,
        "Gateway options"
    );

    let gateway = GatewayService::new(
        Arc::new(HttpReservationClient::new(&config.upstream.reservation_url, client.clone())),
        Arc::new(HttpPaymentClient::new(&config.upstream.payment_url, client.clone())),
        Arc::new(HttpLoyaltyClient::new(&config.upstream.loyalty_url, client)),
        options,
    );
    Ok(GatewayState { gateway })
}

pub async fn serve(app: Router, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
