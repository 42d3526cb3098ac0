//! Shared utilities and common types for the user registry server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and layered loading
//! - Error response structures
//! - Utility functions (log sanitization, generic validators)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigLoadError, DatabaseConfig, Environment, LogFormat, LoggingConfig,
    RegistrationConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use utils::{sanitize, validation};
