use sea_orm::DbErr;
use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(FieldErrors),
    #[error("{label} with id {id} not found")]
    NotFound { label: &'static str, id: i32 },
    /// Storage failure; the driver's message is passed through as is.
    #[error("{0}")]
    Db(String),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl ServiceError {
    pub fn not_found(label: &'static str, id: i32) -> Self {
        Self::NotFound { label, id }
    }

    /// Single-field validation failure.
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::default();
        errors.add(field, message);
        Self::Validation(errors)
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        ServiceError::Db(e.to_string())
    }
}

impl From<FieldErrors> for ServiceError {
    fn from(e: FieldErrors) -> Self {
        ServiceError::Validation(e)
    }
}
