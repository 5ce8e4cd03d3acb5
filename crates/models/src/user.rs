use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::audit::soft_deletable;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub email: String,
    pub name: String,
    pub surname: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role ids are owned by the external auth layer.
    pub role_id: i32,
    pub creation_time: DateTimeWithTimeZone,
    pub creator_user_id: Option<i32>,
    pub last_modification_time: Option<DateTimeWithTimeZone>,
    pub last_modifier_user_id: Option<i32>,
    pub is_deleted: bool,
    pub deleter_user_id: Option<i32>,
    pub deletion_time: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

soft_deletable!("User");
