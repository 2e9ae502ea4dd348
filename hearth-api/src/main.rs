use hearth_api::{bootstrap, gateway_app, telemetry};
use hearth_store::app_config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init("hearth_api=debug,hearth_core=debug,tower_http=debug,axum::rejection=trace");

    let config = Config::load()?;
    tracing::info!("Starting Hearth gateway on port {}", config.gateway.port);

    let state = bootstrap::gateway_state(&config.gateway)?;
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    bootstrap::serve(gateway_app(state), &addr).await
}
