//! Configurable eligibility rules

use chrono::{Datelike, NaiveDate};
use ur_shared::config::RegistrationConfig;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};

/// Whole years elapsed from `from` to `to`.
///
/// The calendar-year difference, minus one when the anniversary has not been
/// reached yet in `to`'s year. Negative when `from` is after `to`.
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years - 1
    } else {
        years
    }
}

/// Minimum age and allowed country checks
#[derive(Debug, Clone)]
pub struct BusinessRuleValidator {
    allowed_country: String,
    min_age: u32,
}

impl BusinessRuleValidator {
    pub fn new(allowed_country: impl Into<String>, min_age: u32) -> Self {
        Self {
            allowed_country: allowed_country.into(),
            min_age,
        }
    }

    pub fn from_config(config: &RegistrationConfig) -> Self {
        Self::new(config.allowed_country.clone(), config.min_age)
    }

    pub fn allowed_country(&self) -> &str {
        &self.allowed_country
    }

    pub fn min_age(&self) -> u32 {
        self.min_age
    }

    /// Validate `user` as of `today`, age first then country
    pub fn validate(&self, user: &User, today: NaiveDate) -> DomainResult<()> {
        self.validate_age(user.birthdate, today)?;
        self.validate_country(&user.country_of_residence)
    }

    fn validate_age(&self, birthdate: NaiveDate, today: NaiveDate) -> DomainResult<()> {
        let age = whole_years_between(birthdate, today);
        if i64::from(age) < i64::from(self.min_age) {
            return Err(DomainError::validation(format!(
                "The user must be at least {} years old.",
                self.min_age
            )));
        }
        Ok(())
    }

    fn validate_country(&self, country: &str) -> DomainResult<()> {
        if self.allowed_country.to_lowercase() != country.to_lowercase() {
            return Err(DomainError::validation(format!(
                "Only residents of {} are allowed to register.",
                self.allowed_country
            )));
        }
        Ok(())
    }
}
