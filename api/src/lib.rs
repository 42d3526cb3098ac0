//! # User Registry API
//!
//! Actix-web surface over the registration and lookup workflows.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod logging;
pub mod routes;

pub use app::{create_app, AppState};
