//! Guard predicates over projects and tasks.

use crate::identity::domain::UserId;
use crate::membership::{domain::ProjectMember, ports::MembershipRepository};
use crate::project::{domain::ProjectId, ports::ProjectRepository};
use crate::task::{domain::TaskId, ports::TaskRepository};
use std::sync::Arc;

/// Evaluates membership, ownership and task-modification checks.
#[derive(Debug)]
pub struct ProjectAuthorizer<S>
where
    S: ProjectRepository + MembershipRepository + TaskRepository,
{
    store: Arc<S>,
}

impl<S> Clone for ProjectAuthorizer<S>
where
    S: ProjectRepository + MembershipRepository + TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> ProjectAuthorizer<S>
where
    S: ProjectRepository + MembershipRepository + TaskRepository,
{
    /// Creates an evaluator over the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns `true` iff `caller` has a membership row in the project.
    ///
    /// A missing project yields `false`.
    pub async fn is_project_member(&self, caller: UserId, project_id: ProjectId) -> bool {
        self.membership(caller, project_id).await.is_some()
    }

    /// Returns `true` iff `caller` is a member holding `LEADER` or `MENTOR`.
    ///
    /// A missing project or membership yields `false`.
    pub async fn is_project_owner(&self, caller: UserId, project_id: ProjectId) -> bool {
        self.membership(caller, project_id)
            .await
            .is_some_and(|member| member.role().is_owner_role())
    }

    /// Returns `true` iff `caller` is the project's recorded creator,
    /// whatever role they currently hold.
    pub async fn is_project_creator(&self, caller: UserId, project_id: ProjectId) -> bool {
        match self.store.find_project(project_id).await {
            Ok(project) => project.is_some_and(|found| found.is_created_by(caller)),
            Err(err) => {
                tracing::debug!(error = %err, project_id = %project_id, "creator check failed");
                false
            }
        }
    }

    /// Returns `true` when `caller` may change the task.
    ///
    /// Any member of the task's project qualifies, not only the task's
    /// creator or assignee. A missing task yields `false`.
    pub async fn can_modify_task(&self, caller: UserId, task_id: TaskId) -> bool {
        let project_id = match self.store.find_task(task_id).await {
            Ok(Some(task)) => task.project_id(),
            Ok(None) => return false,
            Err(err) => {
                tracing::debug!(error = %err, task_id = %task_id, "task lookup failed");
                return false;
            }
        };

        self.is_project_owner(caller, project_id).await
            || self.is_project_member(caller, project_id).await
    }

    async fn membership(&self, caller: UserId, project_id: ProjectId) -> Option<ProjectMember> {
        match self.store.find_member(project_id, caller).await {
            Ok(member) => member,
            Err(err) => {
                tracing::debug!(
                    error = %err,
                    project_id = %project_id,
                    user_id = %caller,
                    "membership lookup failed"
                );
                None
            }
        }
    }
}
