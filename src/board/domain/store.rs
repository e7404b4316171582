//! Mutable task collection backing one project's board.

use super::{StoreError, Task, TaskId, TaskPatch, TaskStatus};
use std::collections::HashMap;

/// Result type for task store mutations.
pub type StoreResult<T> = Result<T, StoreError>;

/// The single mutable source of truth for one project's tasks.
///
/// Created empty when the board view is entered, populated by a full
/// fetch via [`TaskStore::load`], mutated in place by optimistic
/// operations and server confirmations, and discarded when the user
/// navigates away. Every mutation is synchronous, so a projection taken
/// after any single operation reflects that operation's full effect.
///
/// Each task carries a hidden sequence number recording the order it
/// entered the store. The sequence is the stable secondary ordering key
/// that keeps renders deterministic when two tasks in one column share a
/// `position`.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    entries: HashMap<TaskId, StoredTask>,
    next_seq: u64,
}

#[derive(Debug, Clone)]
struct StoredTask {
    task: Task,
    seq: u64,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire collection atomically.
    ///
    /// The order of `tasks` becomes the secondary ordering key, so a
    /// snapshot taken immediately afterwards returns the same sequence.
    /// Used for the initial fetch and for rollback-by-refetch.
    pub fn load(&mut self, tasks: impl IntoIterator<Item = Task>) {
        self.entries.clear();
        self.next_seq = 0;
        for task in tasks {
            let seq = self.next_seq;
            self.next_seq += 1;
            self.entries.insert(task.id, StoredTask { task, seq });
        }
    }

    /// Inserts the task if its id is unknown, otherwise replaces the
    /// existing entity in place.
    ///
    /// A replaced task keeps its secondary ordering key; a new task is
    /// appended after all existing ones. Used when the server confirms an
    /// operation with authoritative fields.
    pub fn upsert(&mut self, task: Task) {
        if let Some(entry) = self.entries.get_mut(&task.id) {
            entry.task = task;
        } else {
            let seq = self.next_seq;
            self.next_seq += 1;
            self.entries.insert(task.id, StoredTask { task, seq });
        }
    }

    /// Mutates only the `status` field of the named task.
    ///
    /// The task's `position` is left untouched; the server reassigns
    /// positions, not the client.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the id is unknown; the store
    /// is unchanged.
    pub fn apply_status_move(
        &mut self,
        task_id: TaskId,
        new_status: TaskStatus,
    ) -> StoreResult<()> {
        let entry = self
            .entries
            .get_mut(&task_id)
            .ok_or(StoreError::NotFound(task_id))?;
        entry.task.status = new_status;
        Ok(())
    }

    /// Merges only the fields present in `patch` into the named task.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the id is unknown; the store
    /// is unchanged.
    pub fn apply_field_edit(&mut self, task_id: TaskId, patch: &TaskPatch) -> StoreResult<()> {
        let entry = self
            .entries
            .get_mut(&task_id)
            .ok_or(StoreError::NotFound(task_id))?;
        entry.task.apply_patch(patch);
        Ok(())
    }

    /// Deletes the named task, returning it for rollback capture.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the id is unknown.
    pub fn remove(&mut self, task_id: TaskId) -> StoreResult<Task> {
        self.entries
            .remove(&task_id)
            .map(|entry| entry.task)
            .ok_or(StoreError::NotFound(task_id))
    }

    /// Returns the named task, if present.
    #[must_use]
    pub fn get(&self, task_id: TaskId) -> Option<&Task> {
        self.entries.get(&task_id).map(|entry| &entry.task)
    }

    /// Returns an immutable copy of the full collection in secondary-key
    /// order (original fetch order, upserts appended).
    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        let mut entries: Vec<&StoredTask> = self.entries.values().collect();
        entries.sort_by_key(|entry| entry.seq);
        entries.iter().map(|entry| entry.task.clone()).collect()
    }

    /// Returns the number of tasks in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
