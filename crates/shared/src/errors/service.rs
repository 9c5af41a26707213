use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(RepositoryError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already seeded: {0}")]
    AlreadySeeded(String),

    #[error("Operation canceled by client")]
    Canceled,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Custom error: {0}")]
    Custom(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Canceled => ServiceError::Canceled,
            other => ServiceError::Repo(other),
        }
    }
}
