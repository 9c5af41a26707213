use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Operation canceled by client")]
    Canceled,

    #[error("Custom: {0}")]
    Custom(String),
}
