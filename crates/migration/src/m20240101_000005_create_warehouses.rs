//! Create `warehouses` table. `type` holds `PRINCIPAL` or `SECUNDARIO`.
use sea_orm_migration::{prelude::*, schema::*};

use crate::audit::with_audit_columns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(Warehouses::Table)
            .if_not_exists()
            .col(pk_auto(Warehouses::Id))
            .col(string_len(Warehouses::Name, 120).not_null())
            .col(string_len(Warehouses::Location, 120).not_null())
            .col(string_len(Warehouses::Type, 20).not_null());
        with_audit_columns(&mut table);
        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Warehouses::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Warehouses { Table, Id, Name, Location, Type }
