//! Create `categories` table.
use sea_orm_migration::{prelude::*, schema::*};

use crate::audit::with_audit_columns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(Categories::Table)
            .if_not_exists()
            .col(pk_auto(Categories::Id))
            .col(string_len(Categories::Name, 120).not_null());
        with_audit_columns(&mut table);
        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Categories::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Categories { Table, Id, Name }
