//! User payload exchanged over HTTP

use chrono::{Local, NaiveDate};
use std::borrow::Cow;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use ur_core::domain::entities::user::{User, UserId};
use ur_shared::validation::ValidationErrors;
use validator::{Validate, ValidationError};

/// Accepted gender spellings, case-sensitive
pub static GENDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(Male|Female|Other)$").expect("gender pattern is a valid regex"));

/// User as sent and returned by the API.
///
/// Required fields are optional here so a missing field surfaces as a field
/// error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserDto {
    /// Ignored on input, always set on output
    #[serde(default)]
    pub id: Option<UserId>,

    #[validate(
        required(message = "Username is required"),
        length(min = 3, max = 50, message = "Username must be between 3 and 50 characters")
    )]
    pub username: Option<String>,

    #[validate(required(message = "Birthdate is required"), custom = "validate_past_date")]
    pub birthdate: Option<NaiveDate>,

    #[validate(required(message = "Country of residence is required"))]
    pub country_of_residence: Option<String>,

    #[validate(length(
        min = 10,
        max = 15,
        message = "Phone number must be between 10 and 15 characters"
    ))]
    pub phone_number: Option<String>,

    #[validate(regex(path = "GENDER_PATTERN", message = "Gender must be Male, Female, or Other"))]
    pub gender: Option<String>,
}

/// Birthdates must lie strictly before today's local date
fn validate_past_date(birthdate: &NaiveDate) -> Result<(), ValidationError> {
    if *birthdate < Local::now().date_naive() {
        return Ok(());
    }
    let mut error = ValidationError::new("past");
    error.message = Some(Cow::Borrowed("Birthdate must be in the past"));
    Err(error)
}

impl UserDto {
    /// Turn the payload into a registration candidate, dropping any `id`
    pub fn into_candidate(self) -> Result<User, ValidationErrors> {
        let (Some(username), Some(birthdate), Some(country_of_residence)) =
            (self.username, self.birthdate, self.country_of_residence)
        else {
            let mut errors = ValidationErrors::new();
            errors.add_error("user", "Username, birthdate and country of residence are required", "required");
            return Err(errors);
        };

        Ok(User {
            id: None,
            username,
            birthdate,
            country_of_residence,
            phone_number: self.phone_number,
            gender: self.gender,
        })
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: Some(user.username),
            birthdate: Some(user.birthdate),
            country_of_residence: Some(user.country_of_residence),
            phone_number: user.phone_number,
            gender: user.gender,
        }
    }
}

/// Query string of the username lookup
#[derive(Debug, Clone, Deserialize)]
pub struct UsernameQuery {
    pub username: String,
}

/// Flatten `validator` failures into field errors
pub fn field_errors(errors: &validator::ValidationErrors) -> ValidationErrors {
    let mut collected = ValidationErrors::new();
    for (field, failures) in errors.field_errors() {
        for failure in failures {
            let message = failure
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| failure.code.to_string());
            collected.add_error(field.to_string(), message, failure.code.to_string());
        }
    }
    collected
}
