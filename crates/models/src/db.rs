use std::time::Duration;

use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::errors::ModelError;

/// Open a pooled connection using the `[database]` section of the config.
pub async fn connect_with_config(cfg: &configs::DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    info!(sqlite = cfg.is_sqlite(), max = cfg.max_connections, "database pool ready");
    Ok(db)
}

/// Apply every pending migration, seed data included.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), ModelError> {
    migration::Migrator::up(db, None).await?;
    info!("migrations applied");
    Ok(())
}
