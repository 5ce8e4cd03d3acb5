//! Request extractors shared by every resource.
use std::convert::Infallible;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use service::{ListParams, ServiceError};

use crate::errors::ApiError;

/// Header the upstream auth layer uses to forward the authenticated user id.
pub const ACTOR_HEADER: &str = "x-user-id";

/// Acting user id for audit columns; `None` when the header is absent or
/// not an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actor(pub Option<i32>);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<i32>().ok());
        Ok(Actor(id))
    }
}

/// `Json<T>` whose rejections are reported as a 422 under the `body` key.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(ApiError(ServiceError::invalid("body", rejection_message(&rejection)))),
        }
    }
}

/// Integer `:id` path segment; anything else is a 422 under `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

#[axum::async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError(ServiceError::invalid("id", rejection.body_text())))?;

        raw.trim()
            .parse::<i32>()
            .map(IdPath)
            .map_err(|_| ApiError(ServiceError::invalid("id", format!("The id must be an integer, got `{raw}`."))))
    }
}

/// Listing query string; malformed values are a 422 under `query`.
#[derive(Debug, Clone, Default)]
pub struct ListQuery(pub ListParams);

#[axum::async_trait]
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<ListParams>::from_request_parts(parts, state)
            .await
            .map(|Query(params)| ListQuery(params))
            .map_err(|rejection| ApiError(ServiceError::invalid("query", rejection.body_text())))
    }
}

fn rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => "Expected a JSON body with `Content-Type: application/json`.".into(),
        other => other.body_text(),
    }
}
