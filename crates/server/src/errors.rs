use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// HTTP face of a [`ServiceError`]:
/// - `Validation` -> 422 `{"errors": {field: [..]}}`
/// - `NotFound` -> 404 `{"error": ..}`
/// - anything else -> 500 `{"error": ..}`
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub ServiceError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Db(_) | ServiceError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.0 {
            ServiceError::Validation(errors) => {
                warn!(%errors, "request rejected");
                (status, Json(serde_json::json!({ "errors": errors }))).into_response()
            }
            not_found @ ServiceError::NotFound { .. } => {
                (status, Json(serde_json::json!({ "error": not_found.to_string() }))).into_response()
            }
            other => {
                let msg = other.to_string();
                error!(error = %msg, "request failed");
                (status, Json(serde_json::json!({ "error": msg }))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError(ServiceError::invalid("name", "x")).status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ApiError(ServiceError::not_found("Brand", 1)).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError(ServiceError::Db("down".into())).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
