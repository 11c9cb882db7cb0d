//! Task aggregate root.

use super::{TaskId, TaskPriority, TaskStatus};
use crate::identity::domain::UserId;
use crate::project::domain::ProjectId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Unit of work inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    created_by: UserId,
    assigned_to: Option<UserId>,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Resolved field values for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Owning project.
    pub project_id: ProjectId,
    /// Member creating the task.
    pub created_by: UserId,
    /// Initial assignee, if any.
    pub assigned_to: Option<UserId>,
    /// Free-form title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Initial status.
    pub status: TaskStatus,
    /// Initial priority.
    pub priority: TaskPriority,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Creates a task from a resolved draft.
    ///
    /// A draft already in `DONE` is stamped as completed at creation.
    #[must_use]
    pub fn new(draft: TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let completed_at = (draft.status == TaskStatus::Done).then_some(timestamp);
        Self {
            id: TaskId::new(),
            project_id: draft.project_id,
            created_by: draft.created_by,
            assigned_to: draft.assigned_to,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            due_date: draft.due_date,
            created_at: timestamp,
            updated_at: timestamp,
            completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the creator.
    #[must_use]
    pub const fn created_by(&self) -> UserId {
        self.created_by
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<UserId> {
        self.assigned_to
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
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

    /// Returns when the task first reached `DONE`, if it has.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Sets the status.
    ///
    /// The completion timestamp is written on the first move into `DONE`
    /// only; later moves in and out of `DONE` keep it.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        let timestamp = clock.utc();
        if status == TaskStatus::Done && self.completed_at.is_none() {
            self.completed_at = Some(timestamp);
        }
        self.status = status;
        self.updated_at = timestamp;
    }

    /// Replaces the assignee.
    pub fn assign(&mut self, user_id: UserId, clock: &impl Clock) {
        self.assigned_to = Some(user_id);
        self.updated_at = clock.utc();
    }
}
