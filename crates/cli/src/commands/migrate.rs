//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! carrito-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `CARRITO_DATABASE_URL` - `PostgreSQL` connection string (falls back
//!   to `DATABASE_URL`)
//!
//! Migration files live in `crates/store/migrations/`.

use carrito_store::{ConfigError, StoreConfig, create_pool};

/// Errors that can occur while migrating.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run the store database migrations.
///
/// # Errors
///
/// Returns `MigrationError` if configuration is missing or a migration fails.
pub async fn run() -> Result<(), MigrationError> {
    let config = StoreConfig::from_env()?;

    tracing::info!("Connecting to carrito database...");
    let pool = create_pool(&config).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../store/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
