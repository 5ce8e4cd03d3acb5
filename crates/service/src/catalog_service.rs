//! Brands and categories: catalog entries whose only business field is a
//! unique, uppercase `name`. Both share one service over [`ModelService`].
use models::{brand, category, SoftDeletable};
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, IntoActiveModel};
use serde::Deserialize;
use tracing::{info, instrument};
use validator::Validate;

use crate::errors::ServiceError;
use crate::model_service::ModelService;
use crate::pagination::ListParams;
use crate::query_service::{Listable, Page, SharedQueryService};
use crate::validation::{check, taken, upper, FieldErrors};

/// Entity identified to users by a `name` unique among live rows.
pub trait NamedEntity: Listable {
    fn name_column() -> Self::Column;
}

impl Listable for brand::Entity {
    fn sortable_columns() -> Vec<brand::Column> {
        vec![brand::Column::Id, brand::Column::Name, brand::Column::CreationTime]
    }

    fn searchable_columns() -> Vec<brand::Column> {
        vec![brand::Column::Name]
    }
}

impl NamedEntity for brand::Entity {
    fn name_column() -> brand::Column {
        brand::Column::Name
    }
}

impl Listable for category::Entity {
    fn sortable_columns() -> Vec<category::Column> {
        vec![category::Column::Id, category::Column::Name, category::Column::CreationTime]
    }

    fn searchable_columns() -> Vec<category::Column> {
        vec![category::Column::Name]
    }
}

impl NamedEntity for category::Entity {
    fn name_column() -> category::Column {
        category::Column::Name
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateNamed {
    #[validate(
        required(message = "The name field is required."),
        length(min = 1, max = 120, message = "The name must be between 1 and 120 characters.")
    )]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateNamed {
    #[validate(length(min = 1, max = 120, message = "The name must be between 1 and 120 characters."))]
    pub name: Option<String>,
}

pub type BrandService = NamedCatalogService<brand::Entity>;
pub type CategoryService = NamedCatalogService<category::Entity>;

pub struct NamedCatalogService<E> {
    model: ModelService<E>,
    query: SharedQueryService,
}

impl<E> Clone for NamedCatalogService<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for NamedCatalogService<E> {}

impl<E> Default for NamedCatalogService<E> {
    fn default() -> Self {
        Self::new(SharedQueryService::default())
    }
}

impl<E> std::fmt::Debug for NamedCatalogService<E>
where
    E: SoftDeletable,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamedCatalogService").field("entity", &E::LABEL).field("query", &self.query).finish()
    }
}

impl<E> NamedCatalogService<E> {
    pub fn new(query: SharedQueryService) -> Self {
        Self { model: ModelService::default(), query }
    }
}

impl<E> NamedCatalogService<E>
where
    E: NamedEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    async fn check_name<C: ConnectionTrait>(
        &self,
        db: &C,
        name: Option<&str>,
        except_id: Option<i32>,
        errors: &mut FieldErrors,
    ) -> Result<(), ServiceError> {
        if let Some(name) = name.filter(|_| !errors.contains("name")) {
            if self.model.exists_live(db, E::name_column(), name, except_id).await? {
                errors.add("name", taken("name"));
            }
        }
        Ok(())
    }

    #[instrument(skip(self, db, input), fields(entity = E::LABEL))]
    pub async fn create<C: ConnectionTrait>(
        &self,
        db: &C,
        mut input: CreateNamed,
        actor: Option<i32>,
    ) -> Result<E::Model, ServiceError> {
        input.name = upper(input.name);
        let mut errors = check(&input);
        self.check_name(db, input.name.as_deref(), None, &mut errors).await?;
        errors.into_result()?;

        let name = input.name.unwrap_or_default();
        let mut am = <E::ActiveModel as ActiveModelBehavior>::new();
        am.set(E::name_column(), name.clone().into());
        let created = self.model.create(db, am, actor).await?;
        info!(entity = E::LABEL, %name, "catalog entry created");
        Ok(created)
    }

    #[instrument(skip(self, db, input), fields(entity = E::LABEL))]
    pub async fn update<C: ConnectionTrait>(
        &self,
        db: &C,
        id: i32,
        mut input: UpdateNamed,
        actor: Option<i32>,
    ) -> Result<E::Model, ServiceError> {
        let existing = self.model.validate(db, id).await?;
        input.name = upper(input.name);
        let mut errors = check(&input);
        self.check_name(db, input.name.as_deref(), Some(id), &mut errors).await?;
        errors.into_result()?;

        let mut am = existing.into_active_model();
        if let Some(name) = input.name {
            am.set(E::name_column(), name.into());
        }
        let updated = self.model.update(db, am, actor).await?;
        info!(entity = E::LABEL, id, "catalog entry updated");
        Ok(updated)
    }

    #[instrument(skip(self, db), fields(entity = E::LABEL))]
    pub async fn delete<C: ConnectionTrait>(&self, db: &C, id: i32, actor: Option<i32>) -> Result<E::Model, ServiceError> {
        let existing = self.model.validate(db, id).await?;
        let deleted = self.model.delete(db, existing, actor).await?;
        info!(entity = E::LABEL, id, "catalog entry deleted");
        Ok(deleted)
    }

    pub async fn find<C: ConnectionTrait>(&self, db: &C, id: i32) -> Result<E::Model, ServiceError> {
        self.model.validate(db, id).await
    }

    pub async fn list<C: ConnectionTrait>(&self, db: &C, params: &ListParams) -> Result<Page<E::Model>, ServiceError> {
        self.query.query::<E, _>(db, params, E::name_column()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use sea_orm::EntityTrait;

    fn create(name: &str) -> CreateNamed {
        CreateNamed { name: Some(name.into()) }
    }

    #[tokio::test]
    async fn names_are_normalized_and_unique_among_live_rows() -> anyhow::Result<()> {
        let db = get_db().await?;
        let svc = BrandService::default();

        let first = svc.create(&db, create("  acme "), Some(1)).await?;
        assert_eq!(first.name, "ACME");
        assert_eq!(first.creator_user_id, Some(1));

        let dup = svc.create(&db, create("Acme"), None).await.unwrap_err();
        match dup {
            ServiceError::Validation(errors) => assert!(errors.contains("name")),
            other => panic!("unexpected error: {other}"),
        }

        svc.delete(&db, first.id, Some(1)).await?;
        let again = svc.create(&db, create("acme"), None).await?;
        assert_ne!(again.id, first.id);
        Ok(())
    }

    #[tokio::test]
    async fn brand_and_category_names_are_independent() -> anyhow::Result<()> {
        let db = get_db().await?;
        BrandService::default().create(&db, create("tools"), None).await?;
        let category = CategoryService::default().create(&db, create("tools"), None).await?;
        assert_eq!(category.name, "TOOLS");

        let dup = CategoryService::default().create(&db, create("Tools"), None).await.unwrap_err();
        assert!(matches!(dup, ServiceError::Validation(ref e) if e.contains("name")));
        Ok(())
    }

    #[tokio::test]
    async fn missing_and_overlong_names_fail() -> anyhow::Result<()> {
        let db = get_db().await?;
        let svc = CategoryService::default();

        let err = svc.create(&db, CreateNamed::default(), None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref e) if e.contains("name")));

        let err = svc.create(&db, create(&"x".repeat(121)), None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref e) if e.contains("name")));

        let err = svc.create(&db, create("   "), None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref e) if e.contains("name")));
        Ok(())
    }

    #[tokio::test]
    async fn update_may_keep_its_own_name() -> anyhow::Result<()> {
        let db = get_db().await?;
        let svc = BrandService::default();
        let b = svc.create(&db, create("acme"), None).await?;
        let u = svc.update(&db, b.id, UpdateNamed { name: Some("ACME".into()) }, Some(2)).await?;
        assert_eq!(u.name, "ACME");
        assert_eq!(u.last_modifier_user_id, Some(2));
        assert_eq!(u.creation_time, b.creation_time);
        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_another_live_name() -> anyhow::Result<()> {
        let db = get_db().await?;
        let svc = CategoryService::default();
        svc.create(&db, create("paint"), None).await?;
        let c = svc.create(&db, create("tools"), None).await?;

        let err = svc.update(&db, c.id, UpdateNamed { name: Some("Paint".into()) }, None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref e) if e.contains("name")));
        assert_eq!(svc.find(&db, c.id).await?.name, "TOOLS");
        Ok(())
    }

    #[tokio::test]
    async fn listing_defaults_to_name_order() -> anyhow::Result<()> {
        let db = get_db().await?;
        let svc = BrandService::default();
        for name in ["zeta", "alfa", "mike"] {
            svc.create(&db, create(name), None).await?;
        }

        let page = svc.list(&db, &ListParams::default()).await?;
        let names: Vec<_> = page.collection.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["ALFA", "MIKE", "ZETA"]);
        Ok(())
    }

    #[tokio::test]
    async fn soft_deleted_entry_is_unreachable_but_stored() -> anyhow::Result<()> {
        let db = get_db().await?;
        let svc = CategoryService::default();
        let c = svc.create(&db, create("tools"), None).await?;
        svc.delete(&db, c.id, Some(5)).await?;

        assert!(matches!(svc.find(&db, c.id).await, Err(ServiceError::NotFound { .. })));
        assert!(matches!(svc.update(&db, c.id, UpdateNamed::default(), None).await, Err(ServiceError::NotFound { .. })));
        assert!(matches!(svc.delete(&db, c.id, None).await, Err(ServiceError::NotFound { .. })));
        assert_eq!(svc.list(&db, &ListParams::default()).await?.total, 0);

        let stored = category::Entity::find_by_id(c.id).one(&db).await?.unwrap();
        assert!(stored.is_deleted);
        assert_eq!(stored.deleter_user_id, Some(5));
        Ok(())
    }
}
