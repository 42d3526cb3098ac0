use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;

use ur_api::app::{create_app, AppState};
use ur_api::logging::init_logging;
use ur_core::repositories::{InMemoryUserRepository, UserRepository};
use ur_core::services::{LoggedUserService, UserService};
use ur_infra::database::{DatabasePool, MySqlUserRepository};
use ur_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Arc::new(AppConfig::load().context("Failed to load configuration")?);
    init_logging(&config.logging).context("Failed to initialize logging")?;

    tracing::info!(environment = %config.environment, "Starting user registry API");

    if config.database.is_configured() {
        let pool = ur_infra::initialize(&config.database)
            .await
            .context("Failed to initialize database")?;
        let repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
        serve(config, repository, Some(pool)).await
    } else {
        tracing::warn!("No database URL configured, using in-memory user store");
        serve(config, Arc::new(InMemoryUserRepository::new()), None).await
    }
}

async fn serve<R>(
    config: Arc<AppConfig>,
    repository: Arc<R>,
    database: Option<DatabasePool>,
) -> anyhow::Result<()>
where
    R: UserRepository + 'static,
{
    let service = LoggedUserService::new(UserService::new(repository, &config.registration));
    let state = web::Data::new(AppState::new(service, database.clone(), config.clone()));

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(state.clone()))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server terminated with an error")?;

    if let Some(pool) = database {
        pool.close().await;
    }
    Ok(())
}
