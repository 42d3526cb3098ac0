//! User registration and lookup workflows
//!
//! - `register` - validates a candidate, rejects taken usernames, persists it
//! - `find_by_id` / `find_by_username` - lookups that fail with `NotFound`
//!
//! [`UserWorkflows`] is the boundary the HTTP layer and the call-boundary
//! logger depend on; [`UserService`] is the implementation over a
//! [`UserRepository`](crate::repositories::UserRepository).

mod service;
mod workflows;


pub use service::{UserService, DATA_INTEGRITY_MESSAGE, UNEXPECTED_FAILURE_MESSAGE};
pub use workflows::UserWorkflows;
