use hearth_api::{backing, bootstrap, telemetry};
use hearth_store::app_config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init("hearth_api=debug,hearth_core=debug,hearth_store=debug,tower_http=debug");

    let config = Config::load()?;
    tracing::info!("Starting Reservation service on port {}", config.reservation.port);

    let state = bootstrap::reservation_state(&config.reservation).await?;
    bootstrap::serve(backing::reservation_app(state), &config.reservation.bind_addr()).await
}
