use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use service::product_service::{CreateProduct, UpdateProduct};
use tracing::info;

use crate::errors::ApiError;
use crate::extract::{Actor, IdPath, JsonBody, ListQuery};
use crate::resources::{Created, Listing, Message, ProductResource};
use crate::state::AppState;
use crate::transaction::in_transaction;

pub async fn list(
    State(state): State<AppState>,
    ListQuery(params): ListQuery,
) -> Result<Json<Listing<ProductResource>>, ApiError> {
    let page = state.products.list(&state.db, &params).await?;
    Ok(Json(page.into()))
}

pub async fn show(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<ProductResource>, ApiError> {
    let product = state.products.find(&state.db, id).await?;
    Ok(Json(product.into()))
}

pub async fn create(
    State(state): State<AppState>,
    Actor(actor): Actor,
    JsonBody(input): JsonBody<CreateProduct>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let svc = state.products;
    let product = in_transaction(&state.db, move |txn| Box::pin(async move { svc.create(txn, input, actor).await })).await?;
    info!(id = product.id, ?actor, "product_create_request");
    Ok((StatusCode::CREATED, Json(Created::new("Product created successfully", product.id))))
}

pub async fn update(
    State(state): State<AppState>,
    Actor(actor): Actor,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UpdateProduct>,
) -> Result<Json<Message>, ApiError> {
    let svc = state.products;
    in_transaction(&state.db, move |txn| Box::pin(async move { svc.update(txn, id, input, actor).await })).await?;
    Ok(Json(Message::new("Product updated successfully")))
}

pub async fn destroy(
    State(state): State<AppState>,
    Actor(actor): Actor,
    IdPath(id): IdPath,
) -> Result<Json<Message>, ApiError> {
    let svc = state.products;
    in_transaction(&state.db, move |txn| Box::pin(async move { svc.delete(txn, id, actor).await })).await?;
    Ok(Json(Message::new("Product deleted successfully")))
}
