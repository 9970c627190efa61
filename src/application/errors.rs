use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<DomainError> for ApplicationError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::NotFound(msg) => ApplicationError::NotFound(msg),
            DomainError::InvalidData(msg) => ApplicationError::ValidationError(msg),
            DomainError::Compile(msg) => ApplicationError::ServiceError(msg),
            DomainError::Upstream(msg) => ApplicationError::ServiceError(msg),
            DomainError::Timeout(msg) => ApplicationError::ServiceError(msg),
            DomainError::Io(msg) => ApplicationError::InternalError(msg),
            DomainError::InternalError(msg) => ApplicationError::InternalError(msg),
        }
    }
}
