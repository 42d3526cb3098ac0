//! Input-shape rules

use chrono::NaiveDate;
use std::ops::RangeInclusive;
use ur_shared::validation::validators::{length_between, not_empty};

use crate::domain::entities::user::User;
use crate::domain::value_objects::Gender;
use crate::errors::{DomainError, DomainResult};

/// Accepted username length in characters
pub const USERNAME_LENGTH: RangeInclusive<usize> = 3..=50;

/// Accepted phone number length in characters
pub const PHONE_LENGTH: RangeInclusive<usize> = 10..=15;

/// Checks the shape of each submitted field, in declaration order
#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    /// Exact, case-sensitive country literal; `None` only requires presence
    required_country: Option<String>,
}

impl InputValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the country of residence to equal `literal` exactly
    pub fn with_required_country(literal: impl Into<String>) -> Self {
        Self {
            required_country: Some(literal.into()),
        }
    }

    /// Validate `user` as of `today`, failing on the first violated rule
    pub fn validate(&self, user: &User, today: NaiveDate) -> DomainResult<()> {
        self.validate_username(&user.username)?;
        self.validate_birthdate(user.birthdate, today)?;
        self.validate_country(&user.country_of_residence)?;
        self.validate_phone_number(user.phone_number.as_deref())?;
        self.validate_gender(user.gender.as_deref())
    }

    fn validate_username(&self, username: &str) -> DomainResult<()> {
        if !length_between(username, *USERNAME_LENGTH.start(), *USERNAME_LENGTH.end()) {
            return Err(DomainError::validation(format!(
                "The username must be between {} and {} characters long.",
                USERNAME_LENGTH.start(),
                USERNAME_LENGTH.end()
            )));
        }
        Ok(())
    }

    fn validate_birthdate(&self, birthdate: NaiveDate, today: NaiveDate) -> DomainResult<()> {
        if birthdate > today {
            return Err(DomainError::validation("The birthdate must be in the past."));
        }
        Ok(())
    }

    fn validate_country(&self, country: &str) -> DomainResult<()> {
        match &self.required_country {
            Some(literal) if country != literal => Err(DomainError::validation(format!(
                "Only residents of {} are allowed.",
                literal
            ))),
            None if !not_empty(country) => {
                Err(DomainError::validation("The country of residence is required."))
            }
            _ => Ok(()),
        }
    }

    fn validate_phone_number(&self, phone_number: Option<&str>) -> DomainResult<()> {
        match phone_number {
            Some(phone) if !length_between(phone, *PHONE_LENGTH.start(), *PHONE_LENGTH.end()) => {
                Err(DomainError::validation(format!(
                    "The phone number must be between {} and {} characters long.",
                    PHONE_LENGTH.start(),
                    PHONE_LENGTH.end()
                )))
            }
            _ => Ok(()),
        }
    }

    fn validate_gender(&self, gender: Option<&str>) -> DomainResult<()> {
        match gender {
            Some(value) if value.parse::<Gender>().is_err() => Err(DomainError::validation(
                "The gender must be one of: Male, Female, or Other.",
            )),
            _ => Ok(()),
        }
    }
}
