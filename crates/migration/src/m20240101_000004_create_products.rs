//! Create `products` table with FKs to `brands`, `categories` and `measurement_units`.
//!
//! `measurement_unit_name` is denormalized from the referenced unit.
use sea_orm_migration::{prelude::*, schema::*};

use crate::audit::with_audit_columns;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(Products::Table)
            .if_not_exists()
            .col(pk_auto(Products::Id))
            .col(integer(Products::BrandId).not_null())
            .col(integer(Products::CategoryId).not_null())
            .col(integer(Products::MeasurementUnitId).not_null())
            .col(string_len(Products::MeasurementUnitName, 120).not_null())
            .col(string_len(Products::Name, 120).not_null())
            .col(ColumnDef::new(Products::Barcode).string_len(100).null())
            .col(ColumnDef::new(Products::BarcodePath).text().null())
            .col(double(Products::SalePrice).not_null())
            .col(double(Products::PurchasePrice).not_null())
            .col(double(Products::MinimumStock).not_null())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_products_brand")
                    .from(Products::Table, Products::BrandId)
                    .to(Brands::Table, Brands::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .on_update(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_products_category")
                    .from(Products::Table, Products::CategoryId)
                    .to(Categories::Table, Categories::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .on_update(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_products_measurement_unit")
                    .from(Products::Table, Products::MeasurementUnitId)
                    .to(MeasurementUnits::Table, MeasurementUnits::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .on_update(ForeignKeyAction::Cascade),
            );
        with_audit_columns(&mut table);
        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Products::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    BrandId,
    CategoryId,
    MeasurementUnitId,
    MeasurementUnitName,
    Name,
    Barcode,
    BarcodePath,
    SalePrice,
    PurchasePrice,
    MinimumStock,
}

#[derive(DeriveIden)]
enum Brands { Table, Id }

#[derive(DeriveIden)]
enum Categories { Table, Id }

#[derive(DeriveIden)]
enum MeasurementUnits { Table, Id }
