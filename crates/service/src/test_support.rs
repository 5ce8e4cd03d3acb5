#![cfg(test)]
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory SQLite database with every migration applied.
///
/// Each call gets its own database; a single pooled connection keeps the
/// in-memory schema alive for the life of the pool.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    models::db::migrate(&db).await?;
    Ok(db)
}
