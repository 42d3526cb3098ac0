//! Translation of failures into HTTP responses

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use std::error::Error as _;
use ur_core::errors::DomainError;
use ur_shared::errors::{error_codes, IntoErrorResponse};
use ur_shared::validation::ValidationErrors;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Errors returned by request handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Workflow failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Payload failed request-shape validation
    #[error("{}", .0.summary())]
    InvalidPayload(ValidationErrors),

    /// Request could not be parsed at all
    #[error("{0}")]
    BadRequest(String),
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::InvalidPayload(crate::dto::user::field_errors(&errors))
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::InvalidPayload(errors)
    }
}

impl IntoErrorResponse for ApiError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            ApiError::Domain(DomainError::Validation { message }) => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())
            }
            ApiError::Domain(error @ DomainError::DuplicateUsername { .. }) => {
                ErrorResponse::new(error_codes::REGISTRATION_ERROR, error.to_string())
            }
            ApiError::Domain(error @ DomainError::NotFound { .. }) => {
                ErrorResponse::new(error_codes::NOT_FOUND, error.to_string())
            }
            ApiError::Domain(DomainError::Persistence { message, .. }) => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, message.clone())
            }
            ApiError::InvalidPayload(errors) => {
                let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, errors.summary());
                for (field, messages) in errors.to_field_errors() {
                    response = response.add_detail(field, messages);
                }
                response
            }
            ApiError::BadRequest(message) => {
                ErrorResponse::new(error_codes::BAD_REQUEST, message.clone())
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::Persistence { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Domain(_) | ApiError::InvalidPayload(_) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            let mut causes = Vec::new();
            let mut current = self.source();
            while let Some(cause) = current {
                causes.push(cause.to_string());
                current = cause.source();
            }
            tracing::error!(error = %self, cause = %causes.join(": "), "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        self.to_error_response().to_response(status)
    }
}

/// Report malformed JSON bodies as `BAD_REQUEST`
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Malformed request body: {}", error)).into()
}

/// Report unparseable query strings as `BAD_REQUEST`
pub fn query_error_handler(error: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid query string: {}", error)).into()
}

/// Fallback for unknown routes
pub async fn not_found() -> HttpResponse {
    ErrorResponse::new(error_codes::NOT_FOUND, "The requested resource was not found")
        .to_response(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ur_core::errors::RepositoryError;

    #[test]
    fn test_domain_error_status_codes() {
        let cases = [
            (ApiError::from(DomainError::validation("bad")), StatusCode::BAD_REQUEST),
            (
                ApiError::from(DomainError::DuplicateUsername { username: "a".into() }),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::from(DomainError::not_found_by_id(1)), StatusCode::NOT_FOUND),
            (
                ApiError::from(DomainError::persistence(
                    "Failed to create user due to data integrity issue",
                    RepositoryError::MissingField { field: "gender".into() },
                )),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.status_code(), status);
        }
    }

    #[test]
    fn test_persistence_body_hides_source() {
        let error = ApiError::from(DomainError::persistence(
            "An unexpected error occurred while registering user",
            RepositoryError::Database("password authentication failed".into()),
        ));

        let body = error.to_error_response();
        assert_eq!(body.error, error_codes::INTERNAL_ERROR);
        assert!(!body.message.contains("password"));
    }

    #[test]
    fn test_duplicate_uses_registration_code() {
        let error = ApiError::from(DomainError::DuplicateUsername { username: "x".into() });
        let body = error.to_error_response();
        assert_eq!(body.error, error_codes::REGISTRATION_ERROR);
        assert_eq!(body.message, "Username is already taken");
    }

    #[test]
    fn test_invalid_payload_details() {
        let mut errors = ValidationErrors::new();
        errors.add_error("username", "too short", "length");

        let body = ApiError::from(errors).to_error_response();
        assert_eq!(body.message, "username: too short");
        assert_eq!(body.details.unwrap()["username"], serde_json::json!(["too short"]));
    }
}
