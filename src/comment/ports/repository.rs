//! Repository port for comment persistence.

use crate::comment::domain::{CommentId, TaskComment};
use crate::error::ErrorKind;
use crate::task::domain::TaskId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for comment repository operations.
pub type TaskCommentRepositoryResult<T> = Result<T, TaskCommentRepositoryError>;

/// Comment persistence contract.
#[async_trait]
pub trait TaskCommentRepository: Send + Sync {
    /// Appends a comment.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommentRepositoryError::DuplicateComment`] when the
    /// identifier already exists.
    async fn store_comment(&self, comment: &TaskComment) -> TaskCommentRepositoryResult<()>;

    /// Returns the comments on a task.
    async fn list_comments_by_task(
        &self,
        task_id: TaskId,
    ) -> TaskCommentRepositoryResult<Vec<TaskComment>>;
}

/// Errors returned by comment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskCommentRepositoryError {
    /// A comment with the same identifier already exists.
    #[error("duplicate comment identifier: {0}")]
    DuplicateComment(CommentId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskCommentRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateComment(_) => ErrorKind::Conflict,
            Self::Persistence(_) => ErrorKind::Internal,
        }
    }
}
