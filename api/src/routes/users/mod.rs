//! User route handlers
//!
//! - `POST /api/v1/users` - register a user
//! - `GET /api/v1/users/{id}` - fetch a user by identifier
//! - `GET /api/v1/users?username=` - fetch a user by username

pub mod find_by_username;
pub mod get_user;
pub mod register;

pub use find_by_username::find_by_username;
pub use get_user::get_user;
pub use register::register;
