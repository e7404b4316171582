//! Board session orchestrating optimistic mutation and reconciliation.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, error, warn};

use crate::board::{
    domain::{
        BoardColumns, PendingChange, PendingRegistry, Project, ProjectId, Task, TaskId, TaskPatch,
        TaskStatus, TaskStore, project_board,
    },
    ports::{GatewayResult, SyncGateway},
};

/// One project's live board: the task store, the pending-operation
/// registry, and the reconciliation policy tying them to the remote
/// authority.
///
/// Store mutations are synchronous and happen inside short-lived lock
/// scopes that never cross an await point, so overlapping gateway calls
/// can interleave only between mutations, never inside one. Failures are
/// silent-but-consistent: the user sees the board revert rather than an
/// error dialog, and no operation is retried automatically.
pub struct BoardSession<G>
where
    G: SyncGateway,
{
    project_id: ProjectId,
    gateway: Arc<G>,
    state: RwLock<SessionState>,
}

#[derive(Default)]
struct SessionState {
    store: TaskStore,
    pending: PendingRegistry,
    project: Option<Project>,
}

impl SessionState {
    /// Undoes an optimistic edit or deletion by restoring the captured
    /// prior task. Moves are not restored here; their rollback is a full
    /// refetch.
    fn roll_back(&mut self, change: PendingChange) {
        match change {
            PendingChange::FieldEdit { prior } | PendingChange::Deletion { prior } => {
                self.store.upsert(prior);
            }
            PendingChange::StatusMove { .. } => {}
        }
    }
}

impl<G> BoardSession<G>
where
    G: SyncGateway,
{
    /// Creates an empty session for one project's board.
    #[must_use]
    pub fn new(project_id: ProjectId, gateway: Arc<G>) -> Self {
        Self {
            project_id,
            gateway,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Returns the project this session renders.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Fetches the authoritative project and task collection and loads
    /// them atomically, replacing any optimistic guesses.
    ///
    /// Used for initial population and for rollback-by-refetch after a
    /// rejected move.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure when either fetch fails; the store is
    /// left untouched.
    pub async fn refresh(&self) -> GatewayResult<()> {
        let (project_result, tasks_result) = tokio::join!(
            self.gateway.fetch_project(self.project_id),
            self.gateway.fetch_all_tasks(self.project_id),
        );
        let project = project_result?;
        let tasks = tasks_result?;

        let mut state = self.write_state();
        state.project = Some(project);
        state.store.load(tasks);
        Ok(())
    }

    /// Derives the three ordered columns for rendering.
    #[must_use]
    pub fn columns(&self) -> BoardColumns {
        let state = self.read_state();
        project_board(&state.store.snapshot())
    }

    /// Returns an immutable copy of the task collection in secondary-key
    /// order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Task> {
        self.read_state().store.snapshot()
    }

    /// Returns a copy of the named task, if present.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<Task> {
        self.read_state().store.get(task_id).cloned()
    }

    /// Returns the project metadata from the last refresh, if any.
    #[must_use]
    pub fn project(&self) -> Option<Project> {
        self.read_state().project.clone()
    }

    /// Returns `true` while an operation on the task awaits its remote
    /// outcome.
    #[must_use]
    pub fn has_pending(&self, task_id: TaskId) -> bool {
        self.read_state().pending.is_pending(task_id)
    }

    /// Inserts a server-confirmed task directly.
    ///
    /// Creation has no prior state to roll back to, so there is no
    /// optimistic phase and no pending record.
    pub fn on_task_created(&self, task: Task) {
        if task.project_id != self.project_id {
            warn!(task_id = %task.id, "created task belongs to another project");
            return;
        }
        self.write_state().store.upsert(task);
    }

    /// Translates a completed drag gesture into a consistent state
    /// transition.
    ///
    /// An absent destination discards the gesture; a drop back into the
    /// origin column is a no-op with no remote call. Otherwise the move
    /// is applied optimistically and confirmed remotely; on rejection
    /// the whole collection is refetched, since the rejection's partial
    /// effect is unknown and a captured baseline could itself be stale.
    pub async fn on_task_dropped(&self, task_id: TaskId, destination: Option<TaskStatus>) {
        let Some(new_status) = destination else {
            debug!(%task_id, "drop target invalid; gesture discarded");
            return;
        };

        let (ticket, prior_status) = {
            let mut state = self.write_state();
            let Some(task) = state.store.get(task_id) else {
                warn!(%task_id, "dropped task missing from store");
                return;
            };
            let prior_status = task.status;
            if prior_status == new_status {
                return;
            }
            if let Err(not_found) = state.store.apply_status_move(task_id, new_status) {
                warn!(%task_id, %not_found, "optimistic move failed");
                return;
            }
            let ticket = state
                .pending
                .register(task_id, PendingChange::StatusMove { prior_status });
            (ticket, prior_status)
        };

        let patch = TaskPatch::new().with_status(new_status);
        match self.gateway.update_task(self.project_id, task_id, patch).await {
            Ok(server_task) => {
                let mut state = self.write_state();
                if state.pending.resolve(task_id, ticket).is_some() {
                    state.store.upsert(server_task);
                } else {
                    debug!(%task_id, %ticket, "discarding stale move confirmation");
                }
            }
            Err(rejection) => {
                let superseded = {
                    let mut state = self.write_state();
                    state.pending.resolve(task_id, ticket).is_none()
                };
                if superseded {
                    debug!(%task_id, %ticket, "discarding stale move rejection");
                    return;
                }
                warn!(
                    %task_id,
                    %rejection,
                    prior_status = prior_status.as_str(),
                    "move rejected; refetching authoritative state"
                );
                if let Err(refetch_failure) = self.refresh().await {
                    error!(%refetch_failure, "rollback refetch failed; board left as-is");
                }
            }
        }
    }

    /// Applies a batch of field edits to one task as a single logical
    /// operation.
    ///
    /// The pre-edit snapshot is captured as the rollback baseline; on
    /// rejection only that task is restored, since an edit's blast
    /// radius is a single task and needs no full refetch.
    pub async fn on_task_edited(&self, task_id: TaskId, patch: TaskPatch) {
        if patch.is_empty() {
            debug!(%task_id, "empty edit; no remote call");
            return;
        }

        let ticket = {
            let mut state = self.write_state();
            let Some(task) = state.store.get(task_id) else {
                warn!(%task_id, "edited task missing from store");
                return;
            };
            let prior = task.clone();
            if let Err(not_found) = state.store.apply_field_edit(task_id, &patch) {
                warn!(%task_id, %not_found, "optimistic edit failed");
                return;
            }
            state
                .pending
                .register(task_id, PendingChange::FieldEdit { prior })
        };

        match self.gateway.update_task(self.project_id, task_id, patch).await {
            Ok(server_task) => {
                let mut state = self.write_state();
                if state.pending.resolve(task_id, ticket).is_some() {
                    state.store.upsert(server_task);
                } else {
                    debug!(%task_id, %ticket, "discarding stale edit confirmation");
                }
            }
            Err(rejection) => {
                let mut state = self.write_state();
                match state.pending.resolve(task_id, ticket) {
                    Some(operation) => {
                        warn!(%task_id, %rejection, "edit rejected; restoring prior task");
                        state.roll_back(operation.into_change());
                    }
                    None => debug!(%task_id, %ticket, "discarding stale edit rejection"),
                }
            }
        }
    }

    /// Deletes one task through the same capture, optimistic mutation,
    /// confirm-or-restore discipline as edits.
    pub async fn on_task_deleted(&self, task_id: TaskId) {
        let ticket = {
            let mut state = self.write_state();
            match state.store.remove(task_id) {
                Ok(prior) => state
                    .pending
                    .register(task_id, PendingChange::Deletion { prior }),
                Err(not_found) => {
                    warn!(%task_id, %not_found, "deleted task missing from store");
                    return;
                }
            }
        };

        match self.gateway.delete_task(self.project_id, task_id).await {
            Ok(()) => {
                let mut state = self.write_state();
                if state.pending.resolve(task_id, ticket).is_none() {
                    debug!(%task_id, %ticket, "discarding stale delete confirmation");
                }
            }
            Err(rejection) => {
                let mut state = self.write_state();
                match state.pending.resolve(task_id, ticket) {
                    Some(operation) => {
                        warn!(%task_id, %rejection, "delete rejected; restoring task");
                        state.roll_back(operation.into_change());
                    }
                    None => debug!(%task_id, %ticket, "discarding stale delete rejection"),
                }
            }
        }
    }

    // A poisoned lock only means a test panicked mid-mutation; the state
    // itself is still coherent, so recover it.
    fn read_state(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
