//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations.

pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use user_repository_impl::MySqlUserRepository;
