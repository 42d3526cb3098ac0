//! Call-boundary logging for workflow entry points
//!
//! Every wrapped call emits a DEBUG `Entering method` event with its sanitized
//! arguments, then either a DEBUG `Exiting method` event with the sanitized
//! result and elapsed time, or an ERROR `Exception in method` event carrying
//! the failure message. The outcome itself is always handed back unchanged.

mod decorator;
mod logger;

#[cfg(test)]
mod tests;

pub use decorator::LoggedUserService;
pub use logger::{log_call, CallLog};
