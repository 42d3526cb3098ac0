use actix_web::{web, HttpResponse};
use ur_core::services::UserWorkflows;

use crate::app::AppState;

/// Health check endpoint handler
///
/// Reports `503` with status `degraded` when a configured database does not
/// answer its health check.
pub async fn health_check<W>(state: web::Data<AppState<W>>) -> HttpResponse
where
    W: UserWorkflows + 'static,
{
    let database = match &state.database {
        Some(pool) => match pool.health_check().await {
            Ok(true) => "up",
            Ok(false) | Err(_) => "down",
        },
        None => "memory",
    };

    let body = serde_json::json!({
        "status": if database == "down" { "degraded" } else { "healthy" },
        "service": "user-registry-api",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment.to_string(),
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    if database == "down" {
        HttpResponse::ServiceUnavailable().json(body)
    } else {
        HttpResponse::Ok().json(body)
    }
}
