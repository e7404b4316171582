//! Bookkeeping for in-flight optimistic operations.

use super::{Task, TaskId, TaskStatus};
use std::collections::HashMap;
use std::fmt;

/// Identity of one pending-operation registration.
///
/// Tickets are handed out in strictly increasing order and never reused,
/// so a resolving remote call can prove it is still the task's current
/// operation before applying any confirm or rollback effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PendingTicket(u64);

impl fmt::Display for PendingTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of optimistic change in flight, carrying the prior values
/// needed to roll it back.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange {
    /// A drag-and-drop column move; rollback is a full refetch, so only
    /// the pre-move status is kept for logging.
    StatusMove {
        /// Status the task had before the optimistic move.
        prior_status: TaskStatus,
    },
    /// A detail-panel field edit; rollback restores the captured task.
    FieldEdit {
        /// Full pre-edit task snapshot.
        prior: Task,
    },
    /// A deletion; rollback re-inserts the captured task.
    Deletion {
        /// Full pre-delete task snapshot.
        prior: Task,
    },
}

/// An in-flight optimistic change awaiting remote confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOperation {
    ticket: PendingTicket,
    task_id: TaskId,
    change: PendingChange,
}

impl PendingOperation {
    /// Returns the registration ticket.
    #[must_use]
    pub const fn ticket(&self) -> PendingTicket {
        self.ticket
    }

    /// Returns the target task id.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the pending change.
    #[must_use]
    pub const fn change(&self) -> &PendingChange {
        &self.change
    }

    /// Consumes the operation, yielding the pending change for rollback.
    #[must_use]
    pub fn into_change(self) -> PendingChange {
        self.change
    }
}

/// Registry of in-flight optimistic operations, at most one per task id.
///
/// Registering a second operation for a task replaces the first record;
/// the first operation's eventual resolution then no longer matches the
/// registered ticket and is discarded as stale. This is what stops a
/// slow confirmation from clobbering a faster subsequent edit.
#[derive(Debug, Clone, Default)]
pub struct PendingRegistry {
    entries: HashMap<TaskId, PendingOperation>,
    next_ticket: u64,
}

impl PendingRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an optimistic change for the task, superseding any record
    /// already registered for the same id.
    pub fn register(&mut self, task_id: TaskId, change: PendingChange) -> PendingTicket {
        let ticket = PendingTicket(self.next_ticket);
        self.next_ticket += 1;
        self.entries.insert(
            task_id,
            PendingOperation {
                ticket,
                task_id,
                change,
            },
        );
        ticket
    }

    /// Resolves the registration identified by `ticket`.
    ///
    /// When the ticket still matches the task's registered record, the
    /// record is removed and returned so the caller can confirm or roll
    /// back. `None` means a newer operation superseded this one; the
    /// caller must discard the resolution without touching the store.
    pub fn resolve(&mut self, task_id: TaskId, ticket: PendingTicket) -> Option<PendingOperation> {
        match self.entries.get(&task_id) {
            Some(current) if current.ticket == ticket => self.entries.remove(&task_id),
            _ => None,
        }
    }

    /// Returns `true` when an operation is outstanding for the task.
    #[must_use]
    pub fn is_pending(&self, task_id: TaskId) -> bool {
        self.entries.contains_key(&task_id)
    }

    /// Returns the number of outstanding operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no operation is outstanding.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
