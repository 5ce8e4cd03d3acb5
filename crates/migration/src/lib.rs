//! Migrator registering the catalog tables in dependency order.
//! Seed data and partial unique indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod audit;
mod m20240101_000001_create_measurement_units;
mod m20240101_000002_create_brands;
mod m20240101_000003_create_categories;
mod m20240101_000004_create_products;
mod m20240101_000005_create_warehouses;
mod m20240101_000006_create_users;
mod m20240101_000007_seed_measurement_units;
mod m20240101_000008_add_live_unique_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_measurement_units::Migration),
            Box::new(m20240101_000002_create_brands::Migration),
            Box::new(m20240101_000003_create_categories::Migration),
            Box::new(m20240101_000004_create_products::Migration),
            Box::new(m20240101_000005_create_warehouses::Migration),
            Box::new(m20240101_000006_create_users::Migration),
            Box::new(m20240101_000007_seed_measurement_units::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000008_add_live_unique_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectOptions, ConnectionTrait, Database, Statement};

    #[tokio::test]
    async fn migrates_up_and_down_on_sqlite() -> Result<(), DbErr> {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1);
        let db = Database::connect(opts).await?;
        Migrator::up(&db, None).await?;

        let row = db
            .query_one(Statement::from_string(
                db.get_database_backend(),
                "SELECT COUNT(*) AS n FROM measurement_units WHERE is_deleted = false",
            ))
            .await?
            .ok_or_else(|| DbErr::Custom("no row".into()))?;
        let n: i64 = row.try_get("", "n")?;
        assert!(n > 90, "expected the unit catalogue to be seeded, got {n}");

        Migrator::down(&db, None).await?;
        Ok(())
    }
}
