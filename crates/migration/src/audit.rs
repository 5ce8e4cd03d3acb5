//! Audit and soft-delete columns shared by every catalog table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveIden)]
pub enum Audit {
    CreationTime,
    CreatorUserId,
    LastModificationTime,
    LastModifierUserId,
    IsDeleted,
    DeleterUserId,
    DeletionTime,
}

pub fn with_audit_columns(table: &mut TableCreateStatement) -> &mut TableCreateStatement {
    table
        .col(timestamp_with_time_zone(Audit::CreationTime).not_null())
        .col(ColumnDef::new(Audit::CreatorUserId).integer().null())
        .col(ColumnDef::new(Audit::LastModificationTime).timestamp_with_time_zone().null())
        .col(ColumnDef::new(Audit::LastModifierUserId).integer().null())
        .col(boolean(Audit::IsDeleted).not_null().default(false))
        .col(ColumnDef::new(Audit::DeleterUserId).integer().null())
        .col(ColumnDef::new(Audit::DeletionTime).timestamp_with_time_zone().null())
}
