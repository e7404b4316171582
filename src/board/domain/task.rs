//! Task entity, status and priority enumerations, and partial edits.

use super::{ParseTaskPriorityError, ParseTaskStatusError, ProjectId, TaskId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Board column a task currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Relative urgency of a task, rendered as a card badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Default urgency.
    Medium,
    /// Should be picked up soon.
    High,
    /// Needs immediate attention.
    Urgent,
}

impl TaskPriority {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "URGENT" => Ok(Self::Urgent),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

/// Project member a task is assigned to, as embedded in task payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAssignee {
    /// Assignee's user identifier.
    pub id: UserId,
    /// Assignee's display name.
    pub name: String,
    /// Assignee's email address, when the server includes it.
    pub email: Option<String>,
}

/// One work item on the board.
///
/// The server is authoritative for `position`, `created_at`, and
/// `updated_at`; the client never computes them locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Stable task identifier.
    pub id: TaskId,
    /// Project the task belongs to.
    pub project_id: ProjectId,
    /// Short card title.
    pub title: String,
    /// Longer free-form description.
    pub description: Option<String>,
    /// Column the task is currently in.
    pub status: TaskStatus,
    /// Urgency badge.
    pub priority: TaskPriority,
    /// Intra-column ordering key, ascending.
    pub position: i64,
    /// Assigned project member, if any.
    pub assignee: Option<TaskAssignee>,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Server-side timestamp of the latest change.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Merges the fields present in `patch` into this task, leaving all
    /// absent fields untouched.
    pub fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(assignee) = &patch.assignee {
            self.assignee = assignee.clone();
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
    }
}

/// Partial task update, carrying only the fields an edit touched.
///
/// Mirrors the update payload of the task API: absent fields are left
/// unchanged, and the assignee field distinguishes "not edited"
/// (`None`) from an explicit unassignment (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Replacement priority.
    pub priority: Option<TaskPriority>,
    /// Replacement assignee; `Some(None)` clears the assignment.
    pub assignee: Option<Option<TaskAssignee>>,
    /// Replacement intra-column position.
    pub position: Option<i64>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the replacement priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the replacement assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: TaskAssignee) -> Self {
        self.assignee = Some(Some(assignee));
        self
    }

    /// Clears the assignment.
    #[must_use]
    pub fn without_assignee(mut self) -> Self {
        self.assignee = Some(None);
        self
    }

    /// Sets the replacement intra-column position.
    #[must_use]
    pub const fn with_position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }

    /// Returns `true` when no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.assignee.is_none()
            && self.position.is_none()
    }
}
