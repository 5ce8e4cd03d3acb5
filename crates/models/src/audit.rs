//! Soft-delete and audit capability shared by every catalog entity.
//!
//! Each entity module invokes [`soft_deletable!`] once; the generic model
//! service in the `service` crate is written against [`SoftDeletable`] only.
use sea_orm::entity::prelude::*;
use sea_orm::Select;

/// Audit and soft-delete hooks for an entity whose table carries the
/// `creation_time .. deletion_time` column block.
pub trait SoftDeletable: EntityTrait {
    /// Human readable name used in error messages and logs.
    const LABEL: &'static str;

    fn id_column() -> Self::Column;
    fn is_deleted_column() -> Self::Column;

    fn stamp_created(am: &mut Self::ActiveModel, actor: Option<i32>, at: DateTimeWithTimeZone);
    fn stamp_modified(am: &mut Self::ActiveModel, actor: Option<i32>, at: DateTimeWithTimeZone);
    fn stamp_deleted(am: &mut Self::ActiveModel, actor: Option<i32>, at: DateTimeWithTimeZone);

    /// Rows that have not been soft-deleted.
    fn live() -> Select<Self> {
        Self::find().filter(Self::is_deleted_column().eq(false))
    }
}

/// Implement [`SoftDeletable`] for the `Entity` of the invoking module.
macro_rules! soft_deletable {
    ($label:literal) => {
        impl $crate::audit::SoftDeletable for Entity {
            const LABEL: &'static str = $label;

            fn id_column() -> Column {
                Column::Id
            }

            fn is_deleted_column() -> Column {
                Column::IsDeleted
            }

            fn stamp_created(
                am: &mut ActiveModel,
                actor: Option<i32>,
                at: ::sea_orm::prelude::DateTimeWithTimeZone,
            ) {
                am.creation_time = ::sea_orm::ActiveValue::Set(at);
                am.creator_user_id = ::sea_orm::ActiveValue::Set(actor);
                am.is_deleted = ::sea_orm::ActiveValue::Set(false);
            }

            fn stamp_modified(
                am: &mut ActiveModel,
                actor: Option<i32>,
                at: ::sea_orm::prelude::DateTimeWithTimeZone,
            ) {
                am.last_modification_time = ::sea_orm::ActiveValue::Set(Some(at));
                am.last_modifier_user_id = ::sea_orm::ActiveValue::Set(actor);
            }

            fn stamp_deleted(
                am: &mut ActiveModel,
                actor: Option<i32>,
                at: ::sea_orm::prelude::DateTimeWithTimeZone,
            ) {
                am.is_deleted = ::sea_orm::ActiveValue::Set(true);
                am.deleter_user_id = ::sea_orm::ActiveValue::Set(actor);
                am.deletion_time = ::sea_orm::ActiveValue::Set(Some(at));
            }
        }
    };
}

pub(crate) use soft_deletable;
