//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `registration` - Eligibility rules for new users
//! - `server` - HTTP server configuration

pub mod database;
pub mod environment;
pub mod registration;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use registration::RegistrationConfig;
pub use server::ServerConfig;

/// Prefix of environment variables overriding file configuration
/// (e.g. `REGISTRY__REGISTRATION__MIN_AGE=21`)
pub const ENV_PREFIX: &str = "REGISTRY";

/// Errors raised while loading or checking configuration
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Registration eligibility rules
    #[serde(default)]
    pub registration: RegistrationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            registration: RegistrationConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from layered sources.
    ///
    /// Sources, lowest precedence first:
    /// 1. `config/default.toml`
    /// 2. `config/<environment>.toml`
    /// 3. `REGISTRY__*` environment variables
    pub fn load() -> Result<Self, ConfigLoadError> {
        let env = Environment::from_env();
        Self::load_from(env, "config")
    }

    /// Load configuration for an explicit environment and configuration directory
    pub fn load_from(env: Environment, dir: &str) -> Result<Self, ConfigLoadError> {
        let settings = config::Config::builder()
            .set_default("environment", env.to_string())?
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/{}", dir, env)).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the service cannot run with
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.registration.allowed_country.trim().is_empty() {
            return Err(ConfigLoadError::Invalid {
                message: "registration.allowed_country must not be empty".to_string(),
            });
        }
        if self.server.port == 0 {
            return Err(ConfigLoadError::Invalid {
                message: "server.port must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
