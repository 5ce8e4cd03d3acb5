//! Read-only access to the seeded unit catalogue.
use models::measurement_unit;
use sea_orm::ConnectionTrait;

use crate::errors::ServiceError;
use crate::model_service::ModelService;
use crate::pagination::ListParams;
use crate::query_service::{Listable, Page, SharedQueryService};

impl Listable for measurement_unit::Entity {
    fn sortable_columns() -> Vec<measurement_unit::Column> {
        vec![measurement_unit::Column::Id, measurement_unit::Column::Name, measurement_unit::Column::Symbol]
    }

    fn searchable_columns() -> Vec<measurement_unit::Column> {
        vec![measurement_unit::Column::Name, measurement_unit::Column::Symbol]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MeasurementUnitService {
    model: ModelService<measurement_unit::Entity>,
    query: SharedQueryService,
}

impl MeasurementUnitService {
    pub fn new(query: SharedQueryService) -> Self {
        Self { model: ModelService::new(), query }
    }

    pub async fn find<C: ConnectionTrait>(&self, db: &C, id: i32) -> Result<measurement_unit::Model, ServiceError> {
        self.model.validate(db, id).await
    }

    pub async fn list<C: ConnectionTrait>(
        &self,
        db: &C,
        params: &ListParams,
    ) -> Result<Page<measurement_unit::Model>, ServiceError> {
        self.query.query::<measurement_unit::Entity, _>(db, params, measurement_unit::Column::Name).await
    }
}
