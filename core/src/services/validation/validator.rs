//! Composite validator run by the registration workflow

use chrono::{Local, NaiveDate};
use ur_shared::config::RegistrationConfig;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;

use super::business::BusinessRuleValidator;
use super::input::InputValidator;

/// Runs the input-shape pass, then the business-rule pass
#[derive(Debug, Clone)]
pub struct UserValidator {
    input: InputValidator,
    business: BusinessRuleValidator,
}

impl UserValidator {
    pub fn new(input: InputValidator, business: BusinessRuleValidator) -> Self {
        Self { input, business }
    }

    /// Build both passes from the registration configuration
    pub fn from_config(config: &RegistrationConfig) -> Self {
        let input = match &config.input_country {
            Some(literal) => InputValidator::with_required_country(literal.clone()),
            None => InputValidator::new(),
        };
        Self::new(input, BusinessRuleValidator::from_config(config))
    }

    /// Validate against today's date in the server's local time zone
    pub fn validate(&self, user: &User) -> DomainResult<()> {
        self.validate_on(user, Local::now().date_naive())
    }

    /// Validate against an explicit reference date
    pub fn validate_on(&self, user: &User, today: NaiveDate) -> DomainResult<()> {
        self.input.validate(user, today)?;
        self.business.validate(user, today)
    }

    pub fn business_rules(&self) -> &BusinessRuleValidator {
        &self.business
    }
}
