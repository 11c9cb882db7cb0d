//! Project aggregate root.

use super::{ProjectId, ProjectStatus, ProjectTitle};
use crate::identity::domain::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Project aggregate root.
///
/// The creator is recorded at creation and never changes. Membership is held
/// separately by the membership store, keyed by [`ProjectId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: ProjectTitle,
    description: String,
    status: ProjectStatus,
    creator_id: UserId,
    members_required: u32,
    deadline: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Field changes applied by [`Project::revise`].
///
/// Title and description are always replaced; the optional fields are only
/// replaced when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRevision {
    /// Replacement title.
    pub title: ProjectTitle,
    /// Replacement description.
    pub description: String,
    /// Replacement status, if any.
    pub status: Option<ProjectStatus>,
    /// Replacement required-member count, if any.
    pub members_required: Option<u32>,
    /// Replacement deadline, if any.
    pub deadline: Option<NaiveDate>,
}

impl Project {
    /// Creates a new `OPEN` project owned by `creator_id`.
    #[must_use]
    pub fn new(
        title: ProjectTitle,
        description: impl Into<String>,
        creator_id: UserId,
        members_required: u32,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ProjectId::new(),
            title,
            description: description.into(),
            status: ProjectStatus::Open,
            creator_id,
            members_required,
            deadline: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &ProjectTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the progress status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the recorded creator.
    #[must_use]
    pub const fn creator_id(&self) -> UserId {
        self.creator_id
    }

    /// Returns `true` when `user_id` is the recorded creator.
    #[must_use]
    pub fn is_created_by(&self, user_id: UserId) -> bool {
        self.creator_id == user_id
    }

    /// Returns the required-member count.
    #[must_use]
    pub const fn members_required(&self) -> u32 {
        self.members_required
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a revision.
    pub fn revise(&mut self, revision: ProjectRevision, clock: &impl Clock) {
        let ProjectRevision {
            title,
            description,
            status,
            members_required,
            deadline,
        } = revision;

        self.title = title;
        self.description = description;
        if let Some(new_status) = status {
            self.status = new_status;
        }
        if let Some(count) = members_required {
            self.members_required = count;
        }
        if deadline.is_some() {
            self.deadline = deadline;
        }
        self.updated_at = clock.utc();
    }
}
