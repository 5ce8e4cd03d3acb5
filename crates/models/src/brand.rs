use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::audit::soft_deletable;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "brands")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
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
    #[sea_orm(has_many = "super::product::Entity")]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

soft_deletable!("Brand");
