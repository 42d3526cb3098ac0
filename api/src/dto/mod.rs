//! Request and response payloads

pub mod error;
pub mod user;

pub use error::{ErrorResponse, ErrorResponseExt};
pub use user::{UserDto, UsernameQuery};
