//! Service layer for appending and listing task comments.

use crate::comment::{
    domain::TaskComment,
    ports::{TaskCommentRepository, TaskCommentRepositoryError},
};
use crate::error::ErrorKind;
use crate::identity::{
    domain::UserId,
    ports::{UserDirectory, UserDirectoryError},
};
use crate::locking::ProjectLease;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for comment operations.
#[derive(Debug, Error)]
pub enum TaskCommentError {
    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The author does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    /// Task lookup failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserDirectoryError),
    /// Comment repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskCommentRepositoryError),
}

impl TaskCommentError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TaskNotFound(_) | Self::UserNotFound(_) => ErrorKind::NotFound,
            Self::Tasks(err) => err.kind(),
            Self::Users(_) => ErrorKind::Internal,
            Self::Repository(err) => err.kind(),
        }
    }
}

/// Result type for comment service operations.
pub type TaskCommentResult<T> = Result<T, TaskCommentError>;

/// Comment log orchestration service.
#[derive(Clone)]
pub struct TaskCommentService<S, C>
where
    S: TaskRepository + UserDirectory + TaskCommentRepository,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TaskCommentService<S, C>
where
    S: TaskRepository + UserDirectory + TaskCommentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new comment service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Appends a comment by `author_id` to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommentError::TaskNotFound`] or
    /// [`TaskCommentError::UserNotFound`] for missing references.
    pub async fn add_comment(
        &self,
        task_id: TaskId,
        author_id: UserId,
        content: &str,
    ) -> TaskCommentResult<TaskComment> {
        self.require_task(task_id).await?;
        self.append(task_id, author_id, content).await
    }

    /// Lists the comments on a task in no guaranteed order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommentError::TaskNotFound`] when the task is missing.
    pub async fn list_by_task(&self, task_id: TaskId) -> TaskCommentResult<Vec<TaskComment>> {
        self.require_task(task_id).await?;
        Ok(self.store.list_comments_by_task(task_id).await?)
    }

    /// Looks up the task a comment targets.
    pub(crate) async fn require_task(&self, task_id: TaskId) -> TaskCommentResult<Task> {
        self.store
            .find_task(task_id)
            .await?
            .ok_or(TaskCommentError::TaskNotFound(task_id))
    }

    pub(crate) async fn add_comment_locked(
        &self,
        lease: &ProjectLease,
        task_id: TaskId,
        author_id: UserId,
        content: &str,
    ) -> TaskCommentResult<TaskComment> {
        let task = self.require_task(task_id).await?;
        if task.project_id() != lease.project_id() {
            return Err(TaskCommentError::TaskNotFound(task_id));
        }
        self.append(task_id, author_id, content).await
    }

    async fn append(
        &self,
        task_id: TaskId,
        author_id: UserId,
        content: &str,
    ) -> TaskCommentResult<TaskComment> {
        if self.store.find_user(author_id).await?.is_none() {
            return Err(TaskCommentError::UserNotFound(author_id));
        }
        let comment = TaskComment::new(task_id, author_id, content, &*self.clock);
        self.store.store_comment(&comment).await?;
        tracing::info!(
            comment_id = %comment.id(),
            task_id = %task_id,
            author_id = %author_id,
            "comment added"
        );
        Ok(comment)
    }
}
