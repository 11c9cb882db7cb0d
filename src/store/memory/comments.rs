//! Comment repository over the in-memory store.

use super::InMemoryCampusStore;
use crate::comment::{
    domain::TaskComment,
    ports::{TaskCommentRepository, TaskCommentRepositoryError, TaskCommentRepositoryResult},
};
use crate::task::domain::TaskId;
use async_trait::async_trait;

#[async_trait]
impl TaskCommentRepository for InMemoryCampusStore {
    async fn store_comment(&self, comment: &TaskComment) -> TaskCommentRepositoryResult<()> {
        let mut state = self
            .write()
            .map_err(TaskCommentRepositoryError::persistence)?;
        if state.comments.contains_key(&comment.id()) {
            return Err(TaskCommentRepositoryError::DuplicateComment(comment.id()));
        }
        state.comments.insert(comment.id(), comment.clone());
        Ok(())
    }

    async fn list_comments_by_task(
        &self,
        task_id: TaskId,
    ) -> TaskCommentRepositoryResult<Vec<TaskComment>> {
        let state = self
            .read()
            .map_err(TaskCommentRepositoryError::persistence)?;
        Ok(state
            .comments
            .values()
            .filter(|comment| comment.task_id() == task_id)
            .cloned()
            .collect())
    }
}
