//! Application state and factory

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use ur_core::services::UserWorkflows;
use ur_infra::database::DatabasePool;
use ur_shared::config::AppConfig;

use crate::handlers::{json_error_handler, not_found, query_error_handler};
use crate::routes::health::health_check;
use crate::routes::users::{find_by_username, get_user, register};

/// Application state shared by every worker
pub struct AppState<W: UserWorkflows> {
    /// Registration and lookup workflows
    pub user_service: Arc<W>,
    /// Pool backing the store, absent in memory mode
    pub database: Option<DatabasePool>,
    /// Configuration loaded at startup
    pub config: Arc<AppConfig>,
}

impl<W: UserWorkflows> AppState<W> {
    pub fn new(user_service: W, database: Option<DatabasePool>, config: Arc<AppConfig>) -> Self {
        Self {
            user_service: Arc::new(user_service),
            database,
            config,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<W>(
    app_state: web::Data<AppState<W>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    W: UserWorkflows + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(app_state.config.server.max_payload_size)
        .error_handler(json_error_handler);
    let query_config = web::QueryConfig::default().error_handler(query_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .app_data(query_config)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check::<W>))
        .service(
            web::scope("/api/v1").service(
                web::scope("/users")
                    .route("", web::post().to(register::<W>))
                    .route("", web::get().to(find_by_username::<W>))
                    .route("/{id}", web::get().to(get_user::<W>)),
            ),
        )
        .default_service(web::route().to(not_found))
}
