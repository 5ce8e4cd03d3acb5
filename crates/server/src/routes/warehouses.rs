use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use service::warehouse_service::{CreateWarehouse, UpdateWarehouse};
use tracing::info;

use crate::errors::ApiError;
use crate::extract::{Actor, IdPath, JsonBody, ListQuery};
use crate::resources::{Created, Listing, Message, WarehouseResource};
use crate::state::AppState;
use crate::transaction::in_transaction;

pub async fn list(
    State(state): State<AppState>,
    ListQuery(params): ListQuery,
) -> Result<Json<Listing<WarehouseResource>>, ApiError> {
    let page = state.warehouses.list(&state.db, &params).await?;
    Ok(Json(page.into()))
}

pub async fn show(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<WarehouseResource>, ApiError> {
    let warehouse = state.warehouses.find(&state.db, id).await?;
    Ok(Json(warehouse.into()))
}

pub async fn create(
    State(state): State<AppState>,
    Actor(actor): Actor,
    JsonBody(input): JsonBody<CreateWarehouse>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let svc = state.warehouses;
    let warehouse = in_transaction(&state.db, move |txn| Box::pin(async move { svc.create(txn, input, actor).await })).await?;
    info!(id = warehouse.id, ?actor, "warehouse_create_request");
    Ok((StatusCode::CREATED, Json(Created::new("Warehouse created successfully", warehouse.id))))
}

pub async fn update(
    State(state): State<AppState>,
    Actor(actor): Actor,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UpdateWarehouse>,
) -> Result<Json<Message>, ApiError> {
    let svc = state.warehouses;
    in_transaction(&state.db, move |txn| Box::pin(async move { svc.update(txn, id, input, actor).await })).await?;
    Ok(Json(Message::new("Warehouse updated successfully")))
}

pub async fn destroy(
    State(state): State<AppState>,
    Actor(actor): Actor,
    IdPath(id): IdPath,
) -> Result<Json<Message>, ApiError> {
    let svc = state.warehouses;
    in_transaction(&state.db, move |txn| Box::pin(async move { svc.delete(txn, id, actor).await })).await?;
    Ok(Json(Message::new("Warehouse deleted successfully")))
}
