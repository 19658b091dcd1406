//! Error types for tasklist core

use thiserror::Error;

/// Violation reported by the [`Validator`](crate::Validator)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title required")]
    EmptyTitle,

    #[error("Description required")]
    EmptyDescription,

    #[error("Due date must be in the future")]
    DueDateNotInFuture,

    #[error("Item id is required")]
    MissingId,

    #[error("Invalid UUID: {0}")]
    InvalidId(String),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
