use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use service::user_service::{CreateUser, UpdateUser};
use tracing::info;

use crate::errors::ApiError;
use crate::extract::{Actor, IdPath, JsonBody, ListQuery};
use crate::resources::{Created, Listing, Message, UserResource};
use crate::state::AppState;
use crate::transaction::in_transaction;

pub async fn list(
    State(state): State<AppState>,
    ListQuery(params): ListQuery,
) -> Result<Json<Listing<UserResource>>, ApiError> {
    let page = state.users.list(&state.db, &params).await?;
    Ok(Json(page.into()))
}

pub async fn show(State(state): State<AppState>, IdPath(id): IdPath) -> Result<Json<UserResource>, ApiError> {
    let user = state.users.find(&state.db, id).await?;
    Ok(Json(user.into()))
}

pub async fn create(
    State(state): State<AppState>,
    Actor(actor): Actor,
    JsonBody(input): JsonBody<CreateUser>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let svc = state.users;
    let user = in_transaction(&state.db, move |txn| Box::pin(async move { svc.create(txn, input, actor).await })).await?;
    info!(id = user.id, ?actor, "user_create_request");
    Ok((StatusCode::CREATED, Json(Created::new("User created successfully", user.id))))
}

pub async fn update(
    State(state): State<AppState>,
    Actor(actor): Actor,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<UpdateUser>,
) -> Result<Json<Message>, ApiError> {
    let svc = state.users;
    in_transaction(&state.db, move |txn| Box::pin(async move { svc.update(txn, id, input, actor).await })).await?;
    Ok(Json(Message::new("User updated successfully")))
}

pub async fn destroy(
    State(state): State<AppState>,
    Actor(actor): Actor,
    IdPath(id): IdPath,
) -> Result<Json<Message>, ApiError> {
    let svc = state.users;
    in_transaction(&state.db, move |txn| Box::pin(async move { svc.delete(txn, id, actor).await })).await?;
    Ok(Json(Message::new("User deleted successfully")))
}
