//! Registration eligibility configuration module

use serde::{Deserialize, Serialize};

/// Eligibility rules applied to every registration candidate.
///
/// Loaded once at startup and shared read-only for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegistrationConfig {
    /// The only country of residence accepted (compared case-insensitively)
    #[serde(default = "default_allowed_country")]
    pub allowed_country: String,

    /// Minimum age in whole years, inclusive
    #[serde(default = "default_min_age")]
    pub min_age: u32,

    /// Optional fixed literal enforced case-sensitively by the input-shape pass.
    /// When absent, the input-shape pass only requires the field to be present.
    #[serde(default)]
    pub input_country: Option<String>,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            allowed_country: default_allowed_country(),
            min_age: default_min_age(),
            input_country: None,
        }
    }
}

impl RegistrationConfig {
    /// Create a registration configuration for a country and minimum age
    pub fn new(allowed_country: impl Into<String>, min_age: u32) -> Self {
        Self {
            allowed_country: allowed_country.into(),
            min_age,
            input_country: None,
        }
    }

    /// Enable the strict, case-sensitive country literal check in the input pass
    pub fn with_input_country(mut self, literal: impl Into<String>) -> Self {
        self.input_country = Some(literal.into());
        self
    }
}

fn default_allowed_country() -> String {
    String::from("France")
}

fn default_min_age() -> u32 {
    18
}
