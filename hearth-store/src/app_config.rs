use hearth_core::gateway::GatewayOptions;
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub reservation: ServiceConfig,
    pub payment: ServiceConfig,
    pub loyalty: ServiceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_fetch_concurrency")]
    pub fetch_concurrency: usize,
    #[serde(default)]
    pub compensate_failed_sagas: bool,
    pub upstream: UpstreamConfig,
}

fn default_fetch_concurrency() -> usize { 1 }

impl GatewayConfig {
    pub fn options(&self) -> GatewayOptions {
        GatewayOptions {
            fetch_concurrency: self.fetch_concurrency.max(1),
            compensate_failed_sagas: self.compensate_failed_sagas,
        }
    }
}

/// Base URLs of the backing services as seen from the gateway
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub reservation_url: String,
    pub payment_url: String,
    pub loyalty_url: String,
    pub timeout_ms: Option<u64>,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// No URL means the service keeps its data in memory
    pub database_url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

fn default_max_connections() -> u32 { 5 }
fn default_run_migrations() -> bool { true }

impl ServiceConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Optional per-environment overrides
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `HEARTH__GATEWAY__PORT=8080`
            .add_source(config::Environment::with_prefix("HEARTH").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Parse a full configuration from TOML text, with no file or env layering
    pub fn from_toml(text: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
