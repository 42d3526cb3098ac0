//! Shared request handling helpers

pub mod error;

pub use error::{json_error_handler, not_found, query_error_handler, ApiError};
