//! Department service - CRUD REST API for department records.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use department_service as app;

use app::api::{self, AppState};
use app::config::{AppConfig, ConfigLoadResult};
use app::db::{self, SeaOrmDepartmentStore};
use app::service::DepartmentService;

/// CRUD REST service for department records.
#[derive(Parser)]
#[command(name = "department-service")]
struct Cli {
    /// Path to config.toml
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match (cli.config, cli.dev) {
        (Some(path), _) => path,
        (None, true) => PathBuf::from("config.toml"),
        (None, false) => AppConfig::default_path(),
    };

    let (config, config_missing) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => (config, false),
        ConfigLoadResult::Missing => (AppConfig::default(), true),
        ConfigLoadResult::Invalid(e) => {
            return Err(anyhow::Error::new(e).context(format!("Invalid config at {}", config_path.display())));
        }
    };

    // Held until exit so the file writer flushes
    let _log_guard = app::logging::init(&config.logging);

    tracing::info!("Department service starting...");
    tracing::info!("Config path: {:?}", config_path);
    if config_missing {
        tracing::warn!("Config file missing, using defaults");
    }

    let conn = db::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    db::test_connection(&conn).await.context("Database is not responding")?;
    db::ensure_schema(&conn).await.context("Failed to create departments table")?;

    match db::count_departments(&conn).await {
        Ok(count) => tracing::info!("Tables: {} departments", count),
        Err(e) => tracing::warn!("Could not count departments: {}", e),
    }

    let service = DepartmentService::new(Arc::new(SeaOrmDepartmentStore::new(conn)));
    let router = api::router(AppState::new(service, config.greeting.name.as_str()));

    let addr = config.server.bind_addr().context("Invalid server address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Department service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
