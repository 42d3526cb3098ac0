use actix_web::{web, HttpResponse};
use ur_core::services::UserWorkflows;
use validator::Validate;

use crate::app::AppState;
use crate::dto::UserDto;
use crate::handlers::ApiError;

/// Handler for POST /api/v1/users
///
/// # Request Body
///
/// ```json
/// {
///     "username": "jdupont",
///     "birthdate": "1990-04-12",
///     "country_of_residence": "France",
///     "phone_number": "0612345678",
///     "gender": "Male"
/// }
/// ```
///
/// # Responses
/// - 201 with the stored user, `id` set
/// - 400 `VALIDATION_ERROR` for payload or eligibility failures
/// - 400 `REGISTRATION_ERROR` when the username is taken
/// - 500 `INTERNAL_ERROR` when the store fails
pub async fn register<W>(
    state: web::Data<AppState<W>>,
    request: web::Json<UserDto>,
) -> Result<HttpResponse, ApiError>
where
    W: UserWorkflows + 'static,
{
    request.validate()?;
    let candidate = request.into_inner().into_candidate()?;

    let saved = state.user_service.register(candidate).await?;

    Ok(HttpResponse::Created().json(UserDto::from(saved)))
}
