use hearth_api::{backing, bootstrap, telemetry};
use hearth_store::app_config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init("hearth_api=debug,hearth_core=debug,hearth_store=debug,tower_http=debug");

    let config = Config::load()?;
    tracing::info!("Starting Payment service on port {}", config.payment.port);

    let state = bootstrap::payment_state(&config.payment).await?;
    bootstrap::serve(backing::payment_app(state), &config.payment.bind_addr()).await
}
