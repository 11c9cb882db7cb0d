//! Shared world state for collaboration workflow BDD scenarios.

use std::sync::Arc;

use campus_collab::collaboration::domain::CollaborationRequest;
use campus_collab::config::PlatformConfig;
use campus_collab::identity::domain::{CallerIdentity, GlobalRole, User, UserId};
use campus_collab::platform::{CollaborationPlatform, PlatformError};
use campus_collab::project::domain::Project;
use campus_collab::store::InMemoryCampusStore;
use campus_collab::task::domain::Task;
use mockable::DefaultClock;
use rstest::fixture;

/// Platform type used by the BDD world.
pub type TestPlatform = CollaborationPlatform<InMemoryCampusStore, DefaultClock>;

/// Scenario world for collaboration workflow behaviour tests.
pub struct CollaborationWorld {
    pub platform: TestPlatform,
    pub leader: CallerIdentity,
    pub student: CallerIdentity,
    pub outsider: CallerIdentity,
    pub project: Option<Project>,
    pub request: Option<CollaborationRequest>,
    pub task: Option<Task>,
    pub last_error: Option<PlatformError>,
}

impl CollaborationWorld {
    /// Creates a world with three registered students and no project.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryCampusStore::new());
        let leader = enrol(&store, UserId::new(1), "Ada");
        let student = enrol(&store, UserId::new(2), "Grace");
        let outsider = enrol(&store, UserId::new(3), "Linus");

        Self {
            platform: CollaborationPlatform::new(
                store,
                Arc::new(DefaultClock),
                PlatformConfig::default(),
            ),
            leader,
            student,
            outsider,
            project: None,
            request: None,
            task: None,
            last_error: None,
        }
    }

    /// Returns the scenario's project or fails the step.
    pub fn project(&self) -> Result<&Project, eyre::Report> {
        self.project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Returns the scenario's request or fails the step.
    pub fn request(&self) -> Result<&CollaborationRequest, eyre::Report> {
        self.request
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing request in scenario world"))
    }

    /// Returns the scenario's task or fails the step.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Resolves a scenario actor name to its caller identity.
    pub fn caller(&self, actor: &str) -> Result<CallerIdentity, eyre::Report> {
        match actor {
            "leader" => Ok(self.leader.clone()),
            "student" => Ok(self.student.clone()),
            "outsider" => Ok(self.outsider.clone()),
            other => Err(eyre::eyre!("unknown actor in scenario: {other}")),
        }
    }
}

impl Default for CollaborationWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn enrol(store: &InMemoryCampusStore, id: UserId, name: &str) -> CallerIdentity {
    let email = format!("{}@campus.edu", name.to_lowercase());
    store
        .insert_user(User::new(id, name, email.clone(), GlobalRole::Student))
        .expect("seeding a fresh store succeeds");
    CallerIdentity::student(id, email)
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CollaborationWorld {
    CollaborationWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
