//! Create `users` table. Roles live with the external auth layer, so
//! `role_id` is a plain integer without a FK.
use sea_orm_migration::{prelude::*, schema::*};

use crate::audit::with_audit_columns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(Users::Table)
            .if_not_exists()
            .col(pk_auto(Users::Id))
            .col(string_len(Users::Username, 60).not_null())
            .col(string_len(Users::Email, 120).not_null())
            .col(string_len(Users::Name, 120).not_null())
            .col(string_len(Users::Surname, 120).not_null())
            .col(string_len(Users::PasswordHash, 255).not_null())
            .col(integer(Users::RoleId).not_null());
        with_audit_columns(&mut table);
        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Users { Table, Id, Username, Email, Name, Surname, PasswordHash, RoleId }
