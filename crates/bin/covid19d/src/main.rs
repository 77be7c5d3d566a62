//! # covid19d — covid19-india daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Open the `SQLite` storage and run migrations; exit non-zero on failure
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT) and close the storage
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use covid19_adapter_http_axum::state::AppState;
use covid19_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteDistrictRepository, SqliteStateRepository,
};
use covid19_app::services::district_service::DistrictService;
use covid19_app::services::state_service::StateService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config.log_filter);

    // Database
    let db = StorageConfig {
        database_url: config.database_url.clone(),
        max_connections: config.max_connections,
    }
    .build()
    .await
    .inspect_err(|err| tracing::error!(error = ?err, "database error"))
    .context("failed to open database")?;

    // Repositories
    let state_repo = SqliteStateRepository::new(db.pool().clone());
    let district_repo = SqliteDistrictRepository::new(db.pool().clone());

    // Services
    let state_service = StateService::new(state_repo);
    let district_service = DistrictService::new(district_repo);

    // HTTP
    let app = covid19_adapter_http_axum::router::build(AppState::new(
        state_service,
        district_service,
    ));

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    tracing::info!("covid19d listening on http://{}", config.listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("covid19d stopped");

    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
