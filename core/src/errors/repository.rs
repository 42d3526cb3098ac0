//! Store-layer error signal

use thiserror::Error;

/// Errors raised by `UserRepository` implementations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// A unique constraint rejected the write
    #[error("Unique constraint violated on {field}")]
    UniqueViolation { field: String },

    /// A required column was missing from the write
    #[error("Required field missing: {field}")]
    MissingField { field: String },

    /// Any other failure reported by the database driver
    #[error("Database error: {0}")]
    Database(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A stored row could not be turned back into a `User`
    #[error("Failed to map stored record: {message}")]
    Mapping { message: String },
}

impl RepositoryError {
    /// Whether the store refused the write because of an integrity constraint
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            RepositoryError::UniqueViolation { .. } | RepositoryError::MissingField { .. }
        )
    }

    /// Whether this is the username uniqueness constraint firing
    pub fn is_duplicate_username(&self) -> bool {
        matches!(self, RepositoryError::UniqueViolation { field } if field == "username")
    }
}
