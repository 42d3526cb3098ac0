//! Common utility functions

pub mod sanitize;
pub mod validation;

// Re-export commonly used utilities
pub use sanitize::{sanitize_args, sanitize_fields, truncate, Sanitize};
pub use validation::*;
