//! Units are seeded reference data; only the read routes exist.
use axum::{extract::State, Json};

use crate::errors::ApiError;
use crate::extract::{IdPath, ListQuery};
use crate::resources::{Listing, MeasurementUnitResource};
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    ListQuery(params): ListQuery,
) -> Result<Json<Listing<MeasurementUnitResource>>, ApiError> {
    let page = state.measurement_units.list(&state.db, &params).await?;
    Ok(Json(page.into()))
}

pub async fn show(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<MeasurementUnitResource>, ApiError> {
    let unit = state.measurement_units.find(&state.db, id).await?;
    Ok(Json(unit.into()))
}
