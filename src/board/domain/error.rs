//! Error types for board domain operations and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned by [`super::TaskStore`] mutation operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The operation referenced a task id absent from the store. This is a
    /// programming or race defect; callers log and ignore it rather than
    /// surfacing it to the user.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Error returned while parsing task statuses from their wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from their wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing project member roles from their wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown member role: {0}")]
pub struct ParseMemberRoleError(pub String);
