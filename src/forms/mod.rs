//! Request payloads accepted by the JSON API.

use thiserror::Error;

pub mod items;
pub mod users;

/// Failure turning a request payload into a domain value.
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("form validation failed: {0}")]
    Validation(String),
    #[error("form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<validator::ValidationErrors> for FormError {
    fn from(val: validator::ValidationErrors) -> Self {
        FormError::Validation(val.to_string())
    }
}

impl From<crate::domain::types::TypeConstraintError> for FormError {
    fn from(val: crate::domain::types::TypeConstraintError) -> Self {
        FormError::TypeConstraint(val.to_string())
    }
}
