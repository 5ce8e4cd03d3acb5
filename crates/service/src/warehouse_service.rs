use std::str::FromStr;

use models::warehouse::{self, WarehouseType};
use sea_orm::{ActiveEnum, ActiveValue::Unchanged, ConnectionTrait, Set};
use serde::Deserialize;
use tracing::{info, instrument};
use validator::Validate;

use crate::errors::ServiceError;
use crate::model_service::ModelService;
use crate::pagination::ListParams;
use crate::query_service::{Listable, Page, SharedQueryService};
use crate::validation::{check, invalid_selection, taken, upper, FieldErrors};

const PRINCIPAL_TAKEN: &str = "A PRINCIPAL warehouse already exists.";

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateWarehouse {
    #[validate(
        required(message = "The name field is required."),
        length(min = 1, max = 120, message = "The name must be between 1 and 120 characters.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "The location field is required."),
        length(min = 1, max = 120, message = "The location must be between 1 and 120 characters.")
    )]
    pub location: Option<String>,
    /// `PRINCIPAL` or `SECUNDARIO`, any case.
    #[serde(rename = "type")]
    pub warehouse_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWarehouse {
    #[validate(length(min = 1, max = 120, message = "The name must be between 1 and 120 characters."))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 120, message = "The location must be between 1 and 120 characters."))]
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub warehouse_type: Option<String>,
}

impl Listable for warehouse::Entity {
    fn sortable_columns() -> Vec<warehouse::Column> {
        vec![
            warehouse::Column::Id,
            warehouse::Column::Name,
            warehouse::Column::Location,
            warehouse::Column::WarehouseType,
            warehouse::Column::CreationTime,
        ]
    }

    fn searchable_columns() -> Vec<warehouse::Column> {
        vec![warehouse::Column::Name, warehouse::Column::Location, warehouse::Column::WarehouseType]
    }
}

/// Parse an already uppercased type; unknown values are recorded under `type`.
fn parse_type(raw: Option<&str>, errors: &mut FieldErrors) -> Option<WarehouseType> {
    let raw = raw?;
    match WarehouseType::from_str(raw) {
        Ok(t) => Some(t),
        Err(_) => {
            errors.add("type", invalid_selection("type"));
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WarehouseService {
    model: ModelService<warehouse::Entity>,
    query: SharedQueryService,
}

impl WarehouseService {
    pub fn new(query: SharedQueryService) -> Self {
        Self { model: ModelService::new(), query }
    }

    /// Name uniqueness and the single live PRINCIPAL rule.
    async fn check_live_rules<C: ConnectionTrait>(
        &self,
        db: &C,
        name: Option<&str>,
        kind: Option<WarehouseType>,
        except_id: Option<i32>,
        errors: &mut FieldErrors,
    ) -> Result<(), ServiceError> {
        if let Some(name) = name.filter(|_| !errors.contains("name")) {
            if self.model.exists_live(db, warehouse::Column::Name, name, except_id).await? {
                errors.add("name", taken("name"));
            }
        }
        if kind == Some(WarehouseType::Principal) {
            let principal = WarehouseType::Principal.to_value();
            if self.model.exists_live(db, warehouse::Column::WarehouseType, principal, except_id).await? {
                errors.add("type", PRINCIPAL_TAKEN);
            }
        }
        Ok(())
    }

    #[instrument(skip(self, db, input))]
    pub async fn create<C: ConnectionTrait>(
        &self,
        db: &C,
        mut input: CreateWarehouse,
        actor: Option<i32>,
    ) -> Result<warehouse::Model, ServiceError> {
        input.name = upper(input.name);
        input.location = upper(input.location);
        input.warehouse_type = upper(input.warehouse_type);

        let mut errors = check(&input);
        if input.warehouse_type.is_none() {
            errors.add("type", "The type field is required.");
        }
        let kind = parse_type(input.warehouse_type.as_deref(), &mut errors);
        self.check_live_rules(db, input.name.as_deref(), kind, None, &mut errors).await?;
        errors.into_result()?;

        let (Some(name), Some(location), Some(kind)) = (input.name, input.location, kind) else {
            return Err(ServiceError::Unexpected("validated warehouse input is incomplete".into()));
        };
        let am = warehouse::ActiveModel {
            name: Set(name),
            location: Set(location),
            warehouse_type: Set(kind),
            ..Default::default()
        };
        let created = self.model.create(db, am, actor).await?;
        info!(id = created.id, kind = %created.warehouse_type, "warehouse created");
        Ok(created)
    }

    #[instrument(skip(self, db, input))]
    pub async fn update<C: ConnectionTrait>(
        &self,
        db: &C,
        id: i32,
        mut input: UpdateWarehouse,
        actor: Option<i32>,
    ) -> Result<warehouse::Model, ServiceError> {
        let existing = self.model.validate(db, id).await?;
        input.name = upper(input.name);
        input.location = upper(input.location);
        input.warehouse_type = upper(input.warehouse_type);

        let mut errors = check(&input);
        let kind = parse_type(input.warehouse_type.as_deref(), &mut errors);
        self.check_live_rules(db, input.name.as_deref(), kind, Some(existing.id), &mut errors).await?;
        errors.into_result()?;

        let mut am = warehouse::ActiveModel { id: Unchanged(existing.id), ..Default::default() };
        if let Some(v) = input.name {
            am.name = Set(v);
        }
        if let Some(v) = input.location {
            am.location = Set(v);
        }
        if let Some(v) = kind {
            am.warehouse_type = Set(v);
        }
        let updated = self.model.update(db, am, actor).await?;
        info!(id = updated.id, "warehouse updated");
        Ok(updated)
    }

    #[instrument(skip(self, db))]
    pub async fn delete<C: ConnectionTrait>(
        &self,
        db: &C,
        id: i32,
        actor: Option<i32>,
    ) -> Result<warehouse::Model, ServiceError> {
        let existing = self.model.validate(db, id).await?;
        let deleted = self.model.delete(db, existing, actor).await?;
        info!(id = deleted.id, "warehouse deleted");
        Ok(deleted)
    }

    pub async fn find<C: ConnectionTrait>(&self, db: &C, id: i32) -> Result<warehouse::Model, ServiceError> {
        self.model.validate(db, id).await
    }

    pub async fn list<C: ConnectionTrait>(
        &self,
        db: &C,
        params: &ListParams,
    ) -> Result<Page<warehouse::Model>, ServiceError> {
        self.query.query::<warehouse::Entity, _>(db, params, warehouse::Column::Name).await
    }
}
