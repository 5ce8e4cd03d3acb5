//! Field-keyed validation errors and input normalization helpers.
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::errors::ServiceError;

/// `{field: [messages]}`; serialized as the bare map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ServiceError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(self))
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (field, errs) in errors.field_errors() {
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("The {} field is invalid.", field.replace('_', " ")));
                out.add(&field, message);
            }
        }
        out
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(String::as_str).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// Run the structural rules of a `validator` input into a fresh error map.
pub fn check<T: Validate>(input: &T) -> FieldErrors {
    match input.validate() {
        Ok(()) => FieldErrors::default(),
        Err(e) => e.into(),
    }
}

/// Trim and uppercase a name-like value; blank input becomes `Some("")`
/// so the length rule reports it.
pub fn upper(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_uppercase())
}

pub fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

pub(crate) fn taken(field: &str) -> String {
    format!("The {} has already been taken.", field.replace('_', " "))
}

pub(crate) fn invalid_selection(field: &str) -> String {
    format!("The selected {} is invalid.", field.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(max = 3, message = "The name may not be greater than 3 characters."))]
        name: Option<String>,
        #[validate(range(min = 1))]
        role_id: Option<i32>,
    }

    #[test]
    fn converts_validator_errors_with_messages() {
        let errors = check(&Probe { name: Some("ABCD".into()), role_id: Some(0) });
        assert_eq!(errors.get("name"), Some(&["The name may not be greater than 3 characters.".to_string()][..]));
        assert_eq!(errors.get("role_id"), Some(&["The role id field is invalid.".to_string()][..]));
    }

    #[test]
    fn absent_optional_fields_pass() {
        assert!(check(&Probe { name: None, role_id: None }).is_empty());
    }

    #[test]
    fn serializes_as_field_map() {
        let mut errors = FieldErrors::default();
        errors.add("name", "The name has already been taken.");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "name": ["The name has already been taken."] }));
    }

    #[test]
    fn upper_trims_and_uppercases() {
        assert_eq!(upper(Some("  acme co ".into())), Some("ACME CO".into()));
        assert_eq!(upper(None), None);
    }

    #[test]
    fn messages() {
        assert_eq!(taken("name"), "The name has already been taken.");
        assert_eq!(invalid_selection("brand_id"), "The selected brand id is invalid.");
    }
}
