use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, StorageBackend};
use dotenvy::dotenv;
use migration::MigratorTrait;
use service::categoria::{CategoriaRepository, CategoriaService, InMemoryCategoriaRepository, SeaOrmCategoriaRepository};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, ServerState};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// `config.toml` (or `CONFIG_PATH`) when it exists, environment variables otherwise.
/// A config file that exists but does not validate is an error.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        AppConfig::load_and_validate()
    } else {
        warn!(%path, "config file not found; using environment");
        AppConfig::from_env()
    }
}

/// Wire the category store selected by `storage.backend` into the service.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let repo: Arc<dyn CategoriaRepository> = match cfg.storage.backend {
        StorageBackend::Memory => {
            info!(backend = "memory", "category store ready");
            Arc::new(InMemoryCategoriaRepository::new())
        }
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            if cfg.database.run_migrations {
                migration::Migrator::up(&db, None).await?;
                info!("migrations applied");
            }
            info!(backend = "postgres", "category store ready");
            Arc::new(SeaOrmCategoriaRepository::new(db))
        }
    };
    Ok(ServerState::new(CategoriaService::new(repo)))
}

pub fn app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = load_config()?;
    let state = build_state(&cfg).await?;
    let app = app(state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting categorias server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
