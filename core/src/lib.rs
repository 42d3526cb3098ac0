//! # User Registry Core
//!
//! Core business logic and domain layer for the user registry backend.
//! This crate contains the user entity, the registration and lookup workflows,
//! eligibility validators, the repository interface, the call-boundary logger,
//! and the error taxonomy shared by every layer above it.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
