//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the maximum length.
    #[error("task title is {0} characters long, expected at most 200")]
    TitleTooLong(usize),

    /// The task description exceeds the maximum length.
    #[error("task description is {0} characters long, expected at most 1000")]
    DescriptionTooLong(usize),
}

/// Error returned while parsing task statuses from boundary input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from boundary input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing sort fields from boundary input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort field: {0}")]
pub struct ParseSortFieldError(pub String);

/// Error returned while parsing sort orders from boundary input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort order: {0}")]
pub struct ParseSortOrderError(pub String);
