use actix_web::{web, HttpResponse};
use ur_core::services::UserWorkflows;

use crate::app::AppState;
use crate::dto::{UserDto, UsernameQuery};
use crate::handlers::ApiError;

/// Handler for GET /api/v1/users?username={username}
pub async fn find_by_username<W>(
    state: web::Data<AppState<W>>,
    query: web::Query<UsernameQuery>,
) -> Result<HttpResponse, ApiError>
where
    W: UserWorkflows + 'static,
{
    let user = state.user_service.find_by_username(&query.username).await?;
    Ok(HttpResponse::Ok().json(UserDto::from(user)))
}
