use async_trait::async_trait;

use crate::domain::entities::user::{User, UserId};
use crate::errors::DomainResult;
use crate::services::user::UserWorkflows;

use super::logger::{log_call, CallLog};

/// [`UserWorkflows`] wrapper logging every call through [`log_call`]
pub struct LoggedUserService<S: UserWorkflows> {
    inner: S,
}

impl<S: UserWorkflows> LoggedUserService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[async_trait]
impl<S: UserWorkflows> UserWorkflows for LoggedUserService<S> {
    async fn register(&self, candidate: User) -> DomainResult<User> {
        let log = CallLog::enter("UserService::register", &[&candidate]);
        log.finish(self.inner.register(candidate).await)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<User> {
        let call = log_call("UserService::find_by_id", &[&id], self.inner.find_by_id(id));
        call.await
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<User> {
        let call = log_call(
            "UserService::find_by_username",
            &[&username],
            self.inner.find_by_username(username),
        );
        call.await
    }
}
