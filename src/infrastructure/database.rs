// src/infrastructure/database.rs
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

/// Build the process-wide pool. Created once at startup and shared by every
/// request; closed explicitly during graceful shutdown.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
