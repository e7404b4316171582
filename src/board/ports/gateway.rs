//! Remote sync gateway port for the board's authorized network exchange.

use crate::board::domain::{Project, ProjectId, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Contract for the remote authority the board reconciles against.
///
/// Implementations own transport, authentication, and timeouts; the
/// board core only consumes the success/failure outcome and never
/// interprets HTTP status codes. Any number of calls may be in flight
/// simultaneously.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SyncGateway: Send + Sync {
    /// Fetches the project whose board is being rendered, including its
    /// member list.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the exchange fails.
    async fn fetch_project(&self, project_id: ProjectId) -> GatewayResult<Project>;

    /// Fetches the full task collection for the project.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the exchange fails.
    async fn fetch_all_tasks(&self, project_id: ProjectId) -> GatewayResult<Vec<Task>>;

    /// Applies a partial update to one task, returning the server's
    /// authoritative representation.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the exchange fails or the server
    /// rejects the update.
    async fn update_task(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        patch: TaskPatch,
    ) -> GatewayResult<Task>;

    /// Deletes one task.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the exchange fails or the server
    /// rejects the deletion.
    async fn delete_task(&self, project_id: ProjectId, task_id: TaskId) -> GatewayResult<()>;
}

/// Failure outcome of a gateway exchange.
///
/// Covers network errors, authorization failures, and server-side
/// validation rejections alike; the board reacts to all of them with the
/// same rollback or refetch policy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct GatewayError {
    /// Human-readable failure description.
    pub message: String,
    /// Field-level validation details, when the server provides them.
    pub field_errors: Vec<FieldError>,
}

impl GatewayError {
    /// Creates a failure with a message and no field details.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    /// Attaches field-level validation details.
    #[must_use]
    pub fn with_field_errors(mut self, field_errors: impl IntoIterator<Item = FieldError>) -> Self {
        self.field_errors = field_errors.into_iter().collect();
        self
    }
}

/// One field-level validation rejection reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the rejected field.
    pub field: String,
    /// Human-readable rejection reason.
    pub message: String,
}

impl FieldError {
    /// Creates a field-level rejection.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
