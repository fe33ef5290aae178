use crate::repository::RepositoryError;

pub mod errors;
pub mod items;
pub mod users;

pub use errors::{ServiceError, ServiceResult};

/// Translate a repository failure for the HTTP layer.
///
/// Constraint violations become [`ServiceError::Conflict`]; anything else is
/// logged and reported as [`ServiceError::Internal`].
fn repository_failure(action: &str, err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
        err => {
            log::error!("Failed to {action}: {err}");
            ServiceError::Internal
        }
    }
}
