//! Business services containing domain logic and use cases.

pub mod call_log;
pub mod user;
pub mod validation;

// Re-export commonly used types
pub use call_log::{log_call, CallLog, LoggedUserService};
pub use user::{UserService, UserWorkflows};
pub use validation::{BusinessRuleValidator, InputValidator, UserValidator};
