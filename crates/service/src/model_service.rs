//! Generic create / update / soft-delete / lookup operations for any
//! [`SoftDeletable`] entity.
use std::marker::PhantomData;

use chrono::Utc;
use models::SoftDeletable;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, Value,
};
use tracing::debug;

use crate::errors::ServiceError;

pub struct ModelService<E> {
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for ModelService<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ModelService<E> {}

impl<E> Default for ModelService<E> {
    fn default() -> Self {
        Self { _entity: PhantomData }
    }
}

impl<E> std::fmt::Debug for ModelService<E>
where
    E: SoftDeletable,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelService").field("entity", &E::LABEL).finish()
    }
}

fn now() -> DateTimeWithTimeZone {
    Utc::now().fixed_offset()
}

impl<E> ModelService<E>
where
    E: SoftDeletable,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&self) -> &'static str {
        E::LABEL
    }

    /// Stamp creation audit fields and insert the row.
    pub async fn create<C: ConnectionTrait>(
        &self,
        db: &C,
        mut am: E::ActiveModel,
        actor: Option<i32>,
    ) -> Result<E::Model, ServiceError> {
        E::stamp_created(&mut am, actor, now());
        let model = am.insert(db).await?;
        Ok(model)
    }

    /// Persist only the fields set on `am` plus the modification stamps.
    /// `am` must carry the primary key.
    pub async fn update<C: ConnectionTrait>(
        &self,
        db: &C,
        mut am: E::ActiveModel,
        actor: Option<i32>,
    ) -> Result<E::Model, ServiceError> {
        E::stamp_modified(&mut am, actor, now());
        let model = am.update(db).await?;
        Ok(model)
    }

    /// Logical removal; the row stays in storage.
    pub async fn delete<C: ConnectionTrait>(
        &self,
        db: &C,
        model: E::Model,
        actor: Option<i32>,
    ) -> Result<E::Model, ServiceError> {
        let mut am = model.into_active_model();
        E::stamp_deleted(&mut am, actor, now());
        let model = am.update(db).await?;
        Ok(model)
    }

    /// Live row by id, or `NotFound`.
    pub async fn validate<C: ConnectionTrait>(&self, db: &C, id: i32) -> Result<E::Model, ServiceError> {
        self.find_live(db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found(E::LABEL, id))
    }

    pub async fn find_live<C: ConnectionTrait>(&self, db: &C, id: i32) -> Result<Option<E::Model>, ServiceError> {
        let found = E::live().filter(E::id_column().eq(id)).one(db).await?;
        Ok(found)
    }

    /// Whether a live row has `column = value`, optionally ignoring `except_id`.
    pub async fn exists_live<C, V>(
        &self,
        db: &C,
        column: E::Column,
        value: V,
        except_id: Option<i32>,
    ) -> Result<bool, ServiceError>
    where
        C: ConnectionTrait,
        V: Into<Value>,
    {
        let mut query = E::live().filter(column.eq(value));
        if let Some(id) = except_id {
            query = query.filter(E::id_column().ne(id));
        }
        let n = query.count(db).await?;
        debug!(entity = E::LABEL, matches = n, "live existence check");
        Ok(n > 0)
    }
}
