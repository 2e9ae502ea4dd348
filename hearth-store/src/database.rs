use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;
use tracing::info;

pub static RESERVATION_MIGRATIONS: Migrator = sqlx::migrate!("../migrations/reservation");
pub static PAYMENT_MIGRATIONS: Migrator = sqlx::migrate!("../migrations/payment");
pub static LOYALTY_MIGRATIONS: Migrator = sqlx::migrate!("../migrations/loyalty");

#[derive(Clone)]
pub struct DbClient {
    pub pool: Pool<Postgres>,
}

impl DbClient {
    pub async fn new(connection_string: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(connection_string)
            .await?;

        Ok(Self { pool })
    }

    pub async fn migrate(&self, migrator: &Migrator) -> Result<(), sqlx::migrate::MigrateError> {
        info!("Running database migrations...");
        migrator.run(&self.pool).await?;
        info!("Migrations completed successfully.");
        Ok(())
    }
}
