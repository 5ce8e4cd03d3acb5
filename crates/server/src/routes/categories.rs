use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use service::catalog_service::{CreateNamed, UpdateNamed};
use tracing::info;

use crate::errors::ApiError;
use crate::extract::{Actor, IdPath, JsonBody, ListQuery};
use crate::resources::{CategoryResource, Created, Listing, Message};
use crate::state::AppState;
use crate::transaction::in_transaction;

pub async fn list(
    State(state): State<AppState>,
    ListQuery(params): ListQuery,
) -> Result<Json<Listing<CategoryResource>>, ApiError> {
    let page = state.categories.list(&state.db, &params).await?;
    Ok(Json(page.into()))
}

pub async fn show(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<CategoryResource>, ApiError> {
    let category = state.categories.find(&state.db, id).await?;
    Ok(Json(category.into()))
}

pub async fn create(
    State(state): State<AppState>,
    Actor(actor): Actor,
    JsonBody(input): JsonBody<CreateNamed>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let svc = state.categories;
    let category = in_transaction(&state.db, move |txn| Box::pin(async move { svc.create(txn, input, actor).await })).await?;
    info!(id = category.id, ?actor, "category_create_request");
    Ok((StatusCode::CREATED, Json(Created::new("Category created successfully", category.id))))
}

pub async fn update(
    State(state): State<AppState>,
    Actor(actor): Actor,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UpdateNamed>,
) -> Result<Json<Message>, ApiError> {
    let svc = state.categories;
    in_transaction(&state.db, move |txn| Box::pin(async move { svc.update(txn, id, input, actor).await })).await?;
    Ok(Json(Message::new("Category updated successfully")))
}

pub async fn destroy(
    State(state): State<AppState>,
    Actor(actor): Actor,
    IdPath(id): IdPath,
) -> Result<Json<Message>, ApiError> {
    let svc = state.categories;
    in_transaction(&state.db, move |txn| Box::pin(async move { svc.delete(txn, id, actor).await })).await?;
    Ok(Json(Message::new("Category deleted successfully")))
}
