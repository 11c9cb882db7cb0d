//! Task comment entity.

use super::CommentId;
use crate::identity::domain::UserId;
use crate::task::domain::TaskId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A note left on a task. Content is stored as given, including when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskComment {
    id: CommentId,
    task_id: TaskId,
    author_id: UserId,
    content: String,
    created_at: DateTime<Utc>,
}

impl TaskComment {
    /// Creates a comment stamped with the current time.
    #[must_use]
    pub fn new(
        task_id: TaskId,
        author_id: UserId,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: CommentId::new(),
            task_id,
            author_id,
            content: content.into(),
            created_at: clock.utc(),
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the task the comment belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the author.
    #[must_use]
    pub const fn author_id(&self) -> UserId {
        self.author_id
    }

    /// Returns the body.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
