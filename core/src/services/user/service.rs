//! Registration and lookup workflow implementation

use async_trait::async_trait;
use std::sync::Arc;
use ur_shared::config::RegistrationConfig;

use crate::domain::entities::user::{User, UserId};
use crate::errors::{DomainError, DomainResult, RepositoryError};
use crate::repositories::UserRepository;
use crate::services::validation::UserValidator;

use super::workflows::UserWorkflows;

/// Message for integrity constraints other than username uniqueness
pub const DATA_INTEGRITY_MESSAGE: &str = "Failed to create user due to data integrity issue";

/// Message for any other store failure during registration
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "An unexpected error occurred while registering user";

const LOOKUP_FAILURE_MESSAGE: &str = "An unexpected error occurred while looking up user";

/// User workflows over a repository
pub struct UserService<R: UserRepository> {
    /// Store the workflows read from and write to
    repository: Arc<R>,
    /// Input and eligibility checks run before any store access
    validator: UserValidator,
}

impl<R: UserRepository> UserService<R> {
    /// Create a service enforcing the given registration rules
    pub fn new(repository: Arc<R>, config: &RegistrationConfig) -> Self {
        Self::with_validator(repository, UserValidator::from_config(config))
    }

    /// Create a service with an explicit validator
    pub fn with_validator(repository: Arc<R>, validator: UserValidator) -> Self {
        Self {
            repository,
            validator,
        }
    }

    pub fn validator(&self) -> &UserValidator {
        &self.validator
    }

    /// Translate a write failure into the error reported to the caller
    fn map_save_error(username: &str, error: RepositoryError) -> DomainError {
        if error.is_duplicate_username() {
            // Lost the race against a concurrent registration
            return DomainError::DuplicateUsername {
                username: username.to_string(),
            };
        }

        let message = if error.is_integrity_violation() {
            DATA_INTEGRITY_MESSAGE
        } else {
            UNEXPECTED_FAILURE_MESSAGE
        };

        tracing::error!(
            error = %error,
            event = "user_save_failed",
            "Failed to persist user"
        );
        DomainError::persistence(message, error)
    }

    fn map_lookup_error(error: RepositoryError) -> DomainError {
        tracing::error!(
            error = %error,
            event = "user_lookup_failed",
            "Failed to read user from store"
        );
        DomainError::persistence(LOOKUP_FAILURE_MESSAGE, error)
    }
}

#[async_trait]
impl<R: UserRepository> UserWorkflows for UserService<R> {
    /// Registration runs in three steps, stopping at the first failure:
    /// 1. input and eligibility validation, no store access
    /// 2. username availability check, one read
    /// 3. persistence of the candidate, one write
    async fn register(&self, candidate: User) -> DomainResult<User> {
        self.validator.validate(&candidate)?;

        let existing = self
            .repository
            .find_by_username(&candidate.username)
            .await
            .map_err(Self::map_lookup_error)?;

        if existing.is_some() {
            return Err(DomainError::DuplicateUsername {
                username: candidate.username,
            });
        }

        let username = candidate.username.clone();
        let saved = self
            .repository
            .save(candidate.into_candidate())
            .await
            .map_err(|e| Self::map_save_error(&username, e))?;

        let Some(id) = saved.id else {
            return Err(DomainError::persistence(
                UNEXPECTED_FAILURE_MESSAGE,
                RepositoryError::Mapping {
                    message: "store returned a record without identifier".to_string(),
                },
            ));
        };

        tracing::info!(user_id = id, event = "user_registered", "Registered new user");
        Ok(saved)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<User> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_lookup_error)?
            .ok_or_else(|| DomainError::not_found_by_id(id))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<User> {
        self.repository
            .find_by_username(username)
            .await
            .map_err(Self::map_lookup_error)?
            .ok_or_else(|| DomainError::not_found_by_username(username))
    }
}
