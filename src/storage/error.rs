//! Storage error taxonomy.

use thiserror::Error;

/// Result type for product storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// The only errors the HTTP layer ever sees from storage.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage product not found")]
    NotFound,

    #[error("storage product not unique: {0}")]
    NotUnique(String),

    #[error("internal storage product error: {0}")]
    Internal(String),
}

impl StorageError {
    pub fn internal(msg: impl Into<String>) -> Self {
        StorageError::Internal(msg.into())
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StorageError::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StorageError::NotUnique(db_err.message().to_string())
            }
            other => StorageError::Internal(other.to_string()),
        }
    }
}
