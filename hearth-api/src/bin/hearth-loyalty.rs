use hearth_api::{backing, bootstrap, telemetry};
use hearth_store::app_config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init("hearth_api=debug,hearth_core=debug,hearth_store=debug,tower_http=debug");

    let config = Config::load()?;
    tracing::info!("Starting Loyalty service on port {}", config.loyalty.port);

    let state = bootstrap::loyalty_state(&config.loyalty).await?;
    bootstrap::serve(backing::loyalty_app(state), &config.loyalty.bind_addr()).await
}
