use actix_web::{web, HttpResponse};
use ur_core::domain::entities::user::UserId;
use ur_core::services::UserWorkflows;

use crate::app::AppState;
use crate::dto::UserDto;
use crate::handlers::ApiError;

/// Handler for GET /api/v1/users/{id}
pub async fn get_user<W>(
    state: web::Data<AppState<W>>,
    path: web::Path<UserId>,
) -> Result<HttpResponse, ApiError>
where
    W: UserWorkflows + 'static,
{
    let user = state.user_service.find_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserDto::from(user)))
}
