//! Shared fixtures for in-memory integration tests.

use campus_collab::config::PlatformConfig;
use campus_collab::identity::domain::{CallerIdentity, GlobalRole, User, UserId};
use campus_collab::platform::CollaborationPlatform;
use campus_collab::project::{domain::Project, services::CreateProjectRequest};
use campus_collab::store::InMemoryCampusStore;
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Platform type exercised by the integration tests.
pub type TestPlatform = CollaborationPlatform<InMemoryCampusStore, DefaultClock>;

/// Creator of the project under test.
pub const LEADER: UserId = UserId::new(1);
/// Student who asks to join.
pub const STUDENT: UserId = UserId::new(2);
/// Student who never joins.
pub const OUTSIDER: UserId = UserId::new(3);

/// Platform wired over a fresh store, plus the store for direct inspection.
pub struct Campus {
    pub store: Arc<InMemoryCampusStore>,
    pub platform: Arc<TestPlatform>,
}

impl Campus {
    /// Identity of the project creator.
    pub fn leader(&self) -> CallerIdentity {
        CallerIdentity::student(LEADER, "ada@campus.edu")
    }

    /// Identity of the joining student.
    pub fn student(&self) -> CallerIdentity {
        CallerIdentity::student(STUDENT, "grace@campus.edu")
    }

    /// Identity of a student outside the project.
    pub fn outsider(&self) -> CallerIdentity {
        CallerIdentity::student(OUTSIDER, "linus@campus.edu")
    }

    /// Creates the "Rover" project as the leader.
    pub async fn rover(&self) -> eyre::Result<Project> {
        let project = self
            .platform
            .create_project(
                &self.leader(),
                CreateProjectRequest::new("Rover", "Autonomous delivery robot"),
            )
            .await?;
        Ok(project)
    }
}

/// Builds a campus with the three well-known students seeded.
#[fixture]
pub fn campus() -> Campus {
    let store = Arc::new(InMemoryCampusStore::new());
    for (id, name) in [(LEADER, "Ada"), (STUDENT, "Grace"), (OUTSIDER, "Linus")] {
        let email = format!("{}@campus.edu", name.to_lowercase());
        store
            .insert_user(User::new(id, name, email, GlobalRole::Student))
            .expect("seeding a fresh store succeeds");
    }
    let platform = Arc::new(CollaborationPlatform::new(
        Arc::clone(&store),
        Arc::new(DefaultClock),
        PlatformConfig::default(),
    ));
    Campus { store, platform }
}
