//! Partial unique indexes scoped to live (`is_deleted = false`) rows.
//!
//! Query builder indexes cannot carry a `WHERE` clause, so these are raw DDL
//! understood by both Postgres and SQLite.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const INDEXES: &[(&str, &str)] = &[
    ("uq_brands_name_live", "CREATE UNIQUE INDEX IF NOT EXISTS uq_brands_name_live ON brands (name) WHERE is_deleted = false"),
    ("uq_categories_name_live", "CREATE UNIQUE INDEX IF NOT EXISTS uq_categories_name_live ON categories (name) WHERE is_deleted = false"),
    ("uq_products_name_live", "CREATE UNIQUE INDEX IF NOT EXISTS uq_products_name_live ON products (name) WHERE is_deleted = false"),
    ("uq_warehouses_name_live", "CREATE UNIQUE INDEX IF NOT EXISTS uq_warehouses_name_live ON warehouses (name) WHERE is_deleted = false"),
    (
        "uq_warehouses_principal_live",
        "CREATE UNIQUE INDEX IF NOT EXISTS uq_warehouses_principal_live ON warehouses (\"type\") WHERE is_deleted = false AND \"type\" = 'PRINCIPAL'",
    ),
    ("uq_users_username_live", "CREATE UNIQUE INDEX IF NOT EXISTS uq_users_username_live ON users (username) WHERE is_deleted = false"),
    ("uq_users_email_live", "CREATE UNIQUE INDEX IF NOT EXISTS uq_users_email_live ON users (email) WHERE is_deleted = false"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for (_, ddl) in INDEXES {
            db.execute_unprepared(ddl).await?;
        }
        // Product FK lookups
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_products_brand")
                    .table(Products::Table)
                    .col(Products::BrandId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_products_category")
                    .table(Products::Table)
                    .col(Products::CategoryId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_products_brand").table(Products::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_products_category").table(Products::Table).to_owned())
            .await?;
        let db = manager.get_connection();
        for (name, _) in INDEXES {
            db.execute_unprepared(&format!("DROP INDEX IF EXISTS {name}")).await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Products { Table, BrandId, CategoryId }
