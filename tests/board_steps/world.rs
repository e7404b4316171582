//! Shared world state for board reconciliation BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskflow::board::{
    adapters::memory::InMemorySyncGateway,
    domain::{ProjectId, TaskId},
    services::BoardSession,
};

/// Gateway type used by the BDD world.
pub type TestGateway = InMemorySyncGateway<DefaultClock>;

/// Scenario world for board reconciliation behaviour tests.
pub struct BoardWorld {
    pub gateway: Arc<TestGateway>,
    pub session: BoardSession<TestGateway>,
    pub project_id: ProjectId,
    pub task_id: Option<TaskId>,
}

impl BoardWorld {
    /// Creates a world with an empty gateway and an unsynchronised session.
    #[must_use]
    pub fn new() -> Self {
        let project_id = ProjectId::new();
        let gateway = Arc::new(InMemorySyncGateway::new(Arc::new(DefaultClock)));
        let session = BoardSession::new(project_id, Arc::clone(&gateway));
        Self {
            gateway,
            session,
            project_id,
            task_id: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
