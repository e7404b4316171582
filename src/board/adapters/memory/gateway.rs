//! In-memory server simulation for board reconciliation tests.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    domain::{Project, ProjectId, Task, TaskId, TaskPatch},
    ports::{GatewayError, GatewayResult, SyncGateway},
};

/// Thread-safe in-memory sync gateway.
///
/// Behaves like the task API: updates merge patch fields and stamp a
/// server-side `updated_at`, fetches return tasks ordered by `position`.
/// Failure-injection hooks and call counters support exercising the
/// board's rollback and no-op paths.
#[derive(Clone)]
pub struct InMemorySyncGateway<C>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<GatewayState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct GatewayState {
    project: Option<Project>,
    tasks: Vec<Task>,
    fetch_failures: VecDeque<GatewayError>,
    update_failures: VecDeque<GatewayError>,
    delete_failures: VecDeque<GatewayError>,
    fetch_calls: u64,
    update_calls: u64,
    delete_calls: u64,
}

impl<C> InMemorySyncGateway<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty gateway stamping server timestamps from `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(GatewayState::default())),
            clock,
        }
    }

    /// Sets the project returned by `fetch_project`.
    pub fn seed_project(&self, project: Project) {
        self.write_state().project = Some(project);
    }

    /// Replaces the server-side task collection.
    pub fn seed_tasks(&self, tasks: impl IntoIterator<Item = Task>) {
        let mut state = self.write_state();
        state.tasks = tasks.into_iter().collect();
    }

    /// Queues a failure for the next `fetch_all_tasks` call.
    pub fn fail_next_fetch(&self, error: GatewayError) {
        self.write_state().fetch_failures.push_back(error);
    }

    /// Queues a failure for the next `update_task` call.
    pub fn fail_next_update(&self, error: GatewayError) {
        self.write_state().update_failures.push_back(error);
    }

    /// Queues a failure for the next `delete_task` call.
    pub fn fail_next_delete(&self, error: GatewayError) {
        self.write_state().delete_failures.push_back(error);
    }

    /// Returns the number of `fetch_all_tasks` calls received.
    #[must_use]
    pub fn fetch_calls(&self) -> u64 {
        self.read_state().fetch_calls
    }

    /// Returns the number of `update_task` calls received.
    #[must_use]
    pub fn update_calls(&self) -> u64 {
        self.read_state().update_calls
    }

    /// Returns the number of `delete_task` calls received.
    #[must_use]
    pub fn delete_calls(&self) -> u64 {
        self.read_state().delete_calls
    }

    /// Returns the server-side task collection in position order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        let state = self.read_state();
        sorted_by_position(&state.tasks)
    }

    // A poisoned lock only means a test panicked mid-write; the state
    // itself is still coherent, so recover it.
    fn read_state(&self) -> RwLockReadGuard<'_, GatewayState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, GatewayState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn sorted_by_position(tasks: &[Task]) -> Vec<Task> {
    let mut sorted: Vec<Task> = tasks.to_vec();
    sorted.sort_by_key(|task| task.position);
    sorted
}

fn find_task_mut<'state>(
    state: &'state mut GatewayState,
    project_id: ProjectId,
    task_id: TaskId,
) -> GatewayResult<&'state mut Task> {
    state
        .tasks
        .iter_mut()
        .find(|task| task.id == task_id && task.project_id == project_id)
        .ok_or_else(|| GatewayError::new(format!("task not found: {task_id}")))
}

#[async_trait]
impl<C> SyncGateway for InMemorySyncGateway<C>
where
    C: Clock + Send + Sync,
{
    async fn fetch_project(&self, project_id: ProjectId) -> GatewayResult<Project> {
        let state = self.read_state();
        state
            .project
            .as_ref()
            .filter(|project| project.id == project_id)
            .cloned()
            .ok_or_else(|| GatewayError::new(format!("project not found: {project_id}")))
    }

    async fn fetch_all_tasks(&self, project_id: ProjectId) -> GatewayResult<Vec<Task>> {
        let mut state = self.write_state();
        state.fetch_calls += 1;
        if let Some(error) = state.fetch_failures.pop_front() {
            return Err(error);
        }
        let project_tasks: Vec<Task> = state
            .tasks
            .iter()
            .filter(|task| task.project_id == project_id)
            .cloned()
            .collect();
        Ok(sorted_by_position(&project_tasks))
    }

    async fn update_task(
        &self,
        project_id: ProjectId,
        task_id: TaskId,
        patch: TaskPatch,
    ) -> GatewayResult<Task> {
        let now = self.clock.utc();
        let mut state = self.write_state();
        state.update_calls += 1;
        if let Some(error) = state.update_failures.pop_front() {
            return Err(error);
        }
        let task = find_task_mut(&mut state, project_id, task_id)?;
        task.apply_patch(&patch);
        task.updated_at = now;
        Ok(task.clone())
    }

    async fn delete_task(&self, project_id: ProjectId, task_id: TaskId) -> GatewayResult<()> {
        let mut state = self.write_state();
        state.delete_calls += 1;
        if let Some(error) = state.delete_failures.pop_front() {
            return Err(error);
        }
        let before = state.tasks.len();
        state
            .tasks
            .retain(|task| !(task.id == task_id && task.project_id == project_id));
        if state.tasks.len() == before {
            return Err(GatewayError::new(format!("task not found: {task_id}")));
        }
        Ok(())
    }
}
