//! Eligibility validation for registration candidates
//!
//! Validation runs in two passes, each stopping at the first violated rule:
//! - `input` - shape of the submitted fields
//! - `business` - configurable eligibility (minimum age, allowed country)

mod business;
mod input;
mod validator;

#[cfg(test)]
mod tests;

pub use business::{whole_years_between, BusinessRuleValidator};
pub use input::{InputValidator, PHONE_LENGTH, USERNAME_LENGTH};
pub use validator::UserValidator;
