//! Access layer sitting between the HTTP routes and the repository.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

pub mod selector;

/// Faults an access-layer operation can run into before it is turned into an
/// error envelope.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Repository(RepositoryError),

    #[error("entity not found")]
    NotFound,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
