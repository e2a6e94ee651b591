//! Record-access errors

use thiserror::Error;

/// Result type for record-access operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Record-access errors
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row with this id
    #[error("Asset {0} not found")]
    NotFound(i64),

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepositoryError {
    /// Whether this is a missing-row error
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound(_))
    }
}
