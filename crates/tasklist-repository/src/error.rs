//! Error types for the repository layer

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No row matches the id
    #[error("Item not found: {id}")]
    NotFound { id: Uuid },

    /// Database error (when database feature is enabled)
    #[cfg(feature = "postgres")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Server too old for the schema
    #[cfg(feature = "postgres")]
    #[error("Unsupported PostgreSQL server: {0}")]
    UnsupportedServer(String),

    /// A stored row could not be mapped onto an item
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}
