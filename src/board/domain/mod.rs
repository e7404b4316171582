//! Domain model for board state reconciliation.
//!
//! The board domain models the task and project entities, the mutable
//! task store rendered by the board, the pure per-column projection, and
//! the pending-operation bookkeeping that makes optimistic mutations safe
//! to confirm or roll back, while keeping all transport concerns outside
//! of the domain boundary.

mod error;
mod ids;
mod pending;
mod project;
mod projection;
mod store;
mod task;

pub use error::{
    ParseMemberRoleError, ParseTaskPriorityError, ParseTaskStatusError, StoreError,
};
pub use ids::{ProjectId, TaskId, UserId};
pub use pending::{PendingChange, PendingOperation, PendingRegistry, PendingTicket};
pub use project::{MemberRole, Project, ProjectMember};
pub use projection::{BOARD_COLUMNS, BoardColumns, project_board};
pub use store::{StoreResult, TaskStore};
pub use task::{Task, TaskAssignee, TaskPatch, TaskPriority, TaskStatus};
