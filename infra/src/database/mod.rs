//! Database connection management.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use mercato_shared::config::DatabaseConfig;

pub mod postgres;

pub use postgres::{
    PgBankAccountRepository, PgPaymentRepository, PgProductRepository, PgUserRepository,
};

/// Builds the shared connection pool from configuration.
///
/// `acquire_timeout` bounds how long any request may wait for a
/// connection, so a saturated pool surfaces a timeout error instead of
/// hanging the request.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .connect(&config.url)
        .await?;

    info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Applies the bundled schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
