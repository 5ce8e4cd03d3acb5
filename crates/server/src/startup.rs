use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{routes, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &configs::ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.host, cfg.port).parse()?)
}

/// Router over an already connected (and migrated) database.
pub fn build_app(db: DatabaseConnection, cfg: &AppConfig) -> Router {
    let state = AppState::new(db, cfg.pagination);
    routes::build_router(state, build_cors())
}

/// Connect, migrate when configured, and serve until the listener fails.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        models::db::migrate(&db).await?;
    }

    let app = build_app(db, &cfg);
    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting inventory server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
