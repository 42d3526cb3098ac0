//! # Infrastructure Layer
//!
//! Concrete persistence for the user registry. It provides:
//! - **Database**: MySQL connection pool, schema migrations and the
//!   `UserRepository` implementation, using SQLx
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use ur_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Configuration consumed by this crate
pub mod config {
    pub use ur_shared::config::DatabaseConfig;
}

#[cfg(feature = "mysql")]
use database::DatabasePool;

/// Connect to the configured database, applying migrations when enabled.
///
/// Fails fast on an unreachable server so startup errors surface before the
/// HTTP listener binds.
#[cfg(feature = "mysql")]
pub async fn initialize(
    config: &config::DatabaseConfig,
) -> Result<DatabasePool, InfrastructureError> {
    tracing::info!(url = %config.redacted_url(), "Initializing database connection");

    let pool = DatabasePool::new(config.clone()).await?;
    if config.run_migrations {
        pool.run_migrations().await?;
    }

    tracing::info!("Infrastructure services initialized successfully");
    Ok(pool)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
