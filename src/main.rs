use std::sync::Arc;

use log::info;
use lp_persistence_sqlite::{SqliteLadderRepository, create_db_pool, init_schema};
use lp_server_app::build_application;

use crate::config::ServerConfig;

mod config;
mod logs;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().expect("Invalid server configuration");

    logs::init_logger(&config.log).expect("Failed to initialize logger");

    let pool = create_db_pool(&config.db_path)
        .await
        .expect("Failed to open ladder database");
    init_schema(&pool)
        .await
        .expect("Failed to create ladder schema");

    let repo = Arc::new(SqliteLadderRepository::new(pool.clone()));
    let app = Arc::new(build_application(
        repo.clone(),
        repo,
        config.ladder_policy,
    ));

    info!(
        "Starting application with {:?} ladder policy on {}",
        config.ladder_policy, config.db_path
    );

    if let Err(e) = lp_server_api::http::run(app, config.http_port, shutdown_signal()).await {
        log::error!("HTTP API failed: {}", e);
    }

    pool.close().await;
    info!("Database pool closed");
}
