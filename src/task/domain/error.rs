//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is zero.
    #[error("task id must be greater than zero")]
    InvalidTaskId,

    /// The title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,
}
