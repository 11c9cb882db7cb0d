//! Project membership row.

use super::ProjectRole;
use crate::identity::domain::UserId;
use crate::project::domain::ProjectId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A user's membership of one project. Unique per (project, user) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMember {
    project_id: ProjectId,
    user_id: UserId,
    role: ProjectRole,
    joined_at: DateTime<Utc>,
}

impl ProjectMember {
    /// Creates a membership joined at the current clock time.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        user_id: UserId,
        role: ProjectRole,
        clock: &impl Clock,
    ) -> Self {
        Self {
            project_id,
            user_id,
            role,
            joined_at: clock.utc(),
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the member's user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the project-scoped role.
    #[must_use]
    pub const fn role(&self) -> ProjectRole {
        self.role
    }

    /// Returns when the user joined.
    #[must_use]
    pub const fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }
}
