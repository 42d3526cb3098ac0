use async_trait::async_trait;

use crate::domain::entities::user::{User, UserId};
use crate::errors::DomainResult;

/// Operations exposed to callers of the user registry
#[async_trait]
pub trait UserWorkflows: Send + Sync {
    /// Validate and persist a candidate, returning the stored record with its id.
    ///
    /// Any `id` carried by the candidate is ignored.
    async fn register(&self, candidate: User) -> DomainResult<User>;

    /// Fetch a persisted record by identifier
    async fn find_by_id(&self, id: UserId) -> DomainResult<User>;

    /// Fetch a persisted record by exact username
    async fn find_by_username(&self, username: &str) -> DomainResult<User>;
}
