//! Pure projection of a store snapshot into ordered board columns.

use super::{Task, TaskStatus};

/// Fixed left-to-right column order of the board.
pub const BOARD_COLUMNS: [TaskStatus; 3] = [
    TaskStatus::Todo,
    TaskStatus::InProgress,
    TaskStatus::Done,
];

/// The three ordered per-status task lists the board renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardColumns {
    /// Tasks in the To Do column.
    pub todo: Vec<Task>,
    /// Tasks in the In Progress column.
    pub in_progress: Vec<Task>,
    /// Tasks in the Done column.
    pub done: Vec<Task>,
}

impl BoardColumns {
    /// Returns the column for the given status.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// Returns the number of tasks in the given column, rendered in the
    /// column header badge.
    #[must_use]
    pub fn count(&self, status: TaskStatus) -> usize {
        self.column(status).len()
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }
}

/// Derives the per-column ordered lists from a store snapshot.
///
/// Pure function of its input: each column holds the subsequence of
/// tasks with that status, ascending by `position`, ties broken by
/// snapshot order (the store's stable secondary key). Recomputed after
/// every store mutation.
#[must_use]
pub fn project_board(snapshot: &[Task]) -> BoardColumns {
    let mut columns = BoardColumns::default();
    for task in snapshot {
        match task.status {
            TaskStatus::Todo => columns.todo.push(task.clone()),
            TaskStatus::InProgress => columns.in_progress.push(task.clone()),
            TaskStatus::Done => columns.done.push(task.clone()),
        }
    }
    // Stable sort: snapshot order survives as the tie-break.
    columns.todo.sort_by_key(|task| task.position);
    columns.in_progress.sort_by_key(|task| task.position);
    columns.done.sort_by_key(|task| task.position);
    columns
}
