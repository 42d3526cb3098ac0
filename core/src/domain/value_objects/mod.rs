//! Value objects representing immutable domain concepts.

pub mod gender;

// Re-export commonly used types
pub use gender::Gender;
