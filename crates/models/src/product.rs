use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::audit::soft_deletable;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub brand_id: i32,
    pub category_id: i32,
    pub measurement_unit_id: i32,
    /// Copied from the unit whenever `measurement_unit_id` is written.
    pub measurement_unit_name: String,
    pub name: String,
    pub barcode: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub barcode_path: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub sale_price: f64,
    #[sea_orm(column_type = "Double")]
    pub purchase_price: f64,
    #[sea_orm(column_type = "Double")]
    pub minimum_stock: f64,
    pub creation_time: DateTimeWithTimeZone,
    pub creator_user_id: Option<i32>,
    pub last_modification_time: Option<DateTimeWithTimeZone>,
    pub last_modifier_user_id: Option<i32>,
    pub is_deleted: bool,
    pub deleter_user_id: Option<i32>,
    pub deletion_time: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::brand::Entity",
        from = "Column::BrandId",
        to = "super::brand::Column::Id"
    )]
    Brand,
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::measurement_unit::Entity",
        from = "Column::MeasurementUnitId",
        to = "super::measurement_unit::Column::Id"
    )]
    MeasurementUnit,
}

impl Related<super::brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::measurement_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeasurementUnit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

soft_deletable!("Product");
