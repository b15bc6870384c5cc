use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Apply the schema. Tables are created only when missing.
pub async fn ensure_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    migration::Migrator::up(db, None).await?;
    info!(event = "schema_ready", "database schema ensured");
    Ok(())
}

/// Connect the pool and ensure the schema, creating the database file if needed.
pub async fn init_db(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    common::env::ensure_db_dir(&cfg.url).await?;
    let db = models::db::connect_with_config(cfg).await?;
    ensure_schema(&db).await?;
    Ok(db)
}

pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(AppState { db }, build_cors())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(event = "shutdown_signal", "shutdown signal received, draining requests");
}

/// Public entry: open the store, serve until a shutdown signal, then close the pool.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = init_db(&cfg.database).await?;
    let app = build_app(db.clone());

    let listener = TcpListener::bind(cfg.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting shop server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!(event = "db_closed", "database pool closed");
    Ok(())
}
