//! User repository trait defining the interface for user data persistence.
//!
//! The repository is the exclusive owner of persisted user records. The trait is
//! async-first; implementations report store failures as `RepositoryError`
//! and leave their translation to the workflows.

use async_trait::async_trait;

use crate::domain::entities::user::{User, UserId};
use crate::errors::RepositoryError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use ur_core::domain::entities::user::{User, UserId};
/// use ur_core::errors::RepositoryError;
/// use ur_core::repositories::UserRepository;
///
/// struct NullUserRepository;
///
/// #[async_trait]
/// impl UserRepository for NullUserRepository {
///     async fn save(&self, user: User) -> Result<User, RepositoryError> {
///         Ok(user.with_id(1))
///     }
///
///     async fn find_by_id(&self, _id: UserId) -> Result<Option<User>, RepositoryError> {
///         Ok(None)
///     }
///
///     async fn find_by_username(&self, _username: &str) -> Result<Option<User>, RepositoryError> {
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a user record
    ///
    /// A record without `id` is inserted and returned with the identifier the
    /// store assigned. A record with `id` replaces the stored record with that id.
    ///
    /// # Returns
    /// * `Ok(User)` - The stored record, always carrying an `id`
    /// * `Err(RepositoryError::UniqueViolation)` - Username already stored
    /// * `Err(RepositoryError::Mapping)` - `id` set but no record stored under it
    /// * `Err(RepositoryError)` - Any other store failure
    async fn save(&self, user: User) -> Result<User, RepositoryError>;

    /// Find a user by their identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(RepositoryError)` - Database or other error occurred
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;

    /// Find a user by their exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
}
