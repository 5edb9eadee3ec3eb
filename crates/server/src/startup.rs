use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use configs::AppConfig;
use service::admin_gate::AdminGate;
use service::storage::supabase::SupabaseStorage;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Read `config.toml` (or `CONFIG_PATH`) when present, otherwise build the
/// configuration from environment variables.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let loaded = if Path::new(&path).exists() {
        AppConfig::load_and_validate()
    } else {
        info!(%path, "no config file; using environment");
        AppConfig::from_env()
    };
    loaded.map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Connect the database and storage, then serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    common::env::ensure_env(&cfg.server.static_dir).await?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        models::db::migrate(&db).await?;
        info!(event = "migrated", "database schema up to date");
    }

    let storage = Arc::new(SupabaseStorage::from_config(&cfg.storage).map_err(StartupError::from)?);
    if cfg.admin.uses_default_password() {
        warn!("admin password is the built-in default; set ADMIN_PASSWORD");
    }
    let gate = AdminGate::from_config(&cfg.admin);
    let state = AppState::with_database(db, storage, &cfg.storage, gate);

    let app: Router = routes::build_router(state, build_cors(), &cfg.server);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting pawn-cms server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}
