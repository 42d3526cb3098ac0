//! Domain-specific error types and error handling.
//!
//! `DomainError` is what workflows return to callers. `RepositoryError` is the
//! signal a store raises; only the workflows translate it into a `DomainError`.

mod repository;


pub use repository::RepositoryError;

use thiserror::Error;

use crate::domain::entities::user::UserId;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Input shape or eligibility rule violated; the caller can fix the input
    #[error("{message}")]
    Validation { message: String },

    /// Username already registered
    #[error("Username is already taken")]
    DuplicateUsername { username: String },

    /// No persisted record for the requested key
    #[error("User not found with {key}: {value}")]
    NotFound { key: LookupKey, value: String },

    /// Unexpected store failure, cause preserved for diagnostics
    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: RepositoryError,
    },
}

/// Key a lookup was performed with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKey {
    Id,
    Username,
}

impl std::fmt::Display for LookupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupKey::Id => write!(f, "ID"),
            LookupKey::Username => write!(f, "username"),
        }
    }
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    pub fn not_found_by_id(id: UserId) -> Self {
        DomainError::NotFound {
            key: LookupKey::Id,
            value: id.to_string(),
        }
    }

    pub fn not_found_by_username(username: impl Into<String>) -> Self {
        DomainError::NotFound {
            key: LookupKey::Username,
            value: username.into(),
        }
    }

    pub fn persistence(message: impl Into<String>, source: RepositoryError) -> Self {
        DomainError::Persistence {
            message: message.into(),
            source,
        }
    }

    /// Whether the caller can recover by changing its request
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DomainError::Persistence { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
