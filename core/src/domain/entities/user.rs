//! User entity representing a registered (or candidate) user.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ur_shared::sanitize::{sanitize_fields, Sanitize};

/// Store-assigned user identifier
pub type UserId = i64;

/// User record.
///
/// A candidate carries no `id`; the store assigns one when the record is
/// persisted and it never changes afterwards. Records are treated as values:
/// a change is a new `User` with the same `id`, never an in-place edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier, absent until persisted
    pub id: Option<UserId>,

    /// Unique login name, 3 to 50 characters
    pub username: String,

    /// Date of birth, never in the future
    pub birthdate: NaiveDate,

    /// Country the user lives in
    pub country_of_residence: String,

    /// Optional phone number, 10 to 15 characters
    pub phone_number: Option<String>,

    /// Optional gender: `Male`, `Female` or `Other`
    pub gender: Option<String>,
}

impl User {
    /// Creates a new candidate (not yet persisted) user
    pub fn new(
        username: impl Into<String>,
        birthdate: NaiveDate,
        country_of_residence: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            username: username.into(),
            birthdate,
            country_of_residence: country_of_residence.into(),
            phone_number: None,
            gender: None,
        }
    }

    /// Returns a copy carrying the given phone number
    pub fn with_phone_number(self, phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: Some(phone_number.into()),
            ..self
        }
    }

    /// Returns a copy carrying the given gender
    pub fn with_gender(self, gender: impl Into<String>) -> Self {
        Self {
            gender: Some(gender.into()),
            ..self
        }
    }

    /// Returns the persisted form of this record under `id`
    pub fn with_id(self, id: UserId) -> Self {
        Self { id: Some(id), ..self }
    }

    /// Returns the candidate form of this record, identifier stripped
    pub fn into_candidate(self) -> Self {
        Self { id: None, ..self }
    }

    /// Whether the store has assigned an identifier
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl Sanitize for User {
    fn sanitize(&self) -> String {
        sanitize_fields(&[
            ("id", &self.id),
            ("username", &self.username),
            ("birthdate", &self.birthdate),
            ("country_of_residence", &self.country_of_residence),
            ("phone_number", &self.phone_number),
            ("gender", &self.gender),
        ])
    }
}
