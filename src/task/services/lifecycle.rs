//! Service layer for creating, updating, assigning and listing tasks.

use crate::error::ErrorKind;
use crate::identity::{
    domain::UserId,
    ports::{UserDirectory, UserDirectoryError},
};
use crate::locking::{ProjectLease, ProjectLocks};
use crate::membership::ports::{MembershipRepository, MembershipRepositoryError};
use crate::project::{
    domain::ProjectId,
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::task::{
    domain::{
        ParseTaskPriorityError, ParseTaskStatusError, Task, TaskDraft, TaskId, TaskPriority,
        TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    assigned_to: Option<UserId>,
    due_date: Option<NaiveDate>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: None,
            status: None,
            priority: None,
            assigned_to: None,
            due_date: None,
        }
    }

    /// Returns the target project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status label. Blank labels fall back to `TODO`.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the priority label. Blank labels fall back to `MEDIUM`.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the initial assignee.
    #[must_use]
    pub const fn with_assignee(mut self, user_id: UserId) -> Self {
        self.assigned_to = Some(user_id);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The status label was not recognised.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// The priority label was not recognised.
    #[error(transparent)]
    InvalidPriority(#[from] ParseTaskPriorityError),
    /// The project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    /// The user does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The creator does not belong to the project.
    #[error("user {user_id} cannot create tasks in project {project_id}: not a member")]
    CreatorNotMember {
        /// Target project.
        project_id: ProjectId,
        /// Would-be creator.
        user_id: UserId,
    },
    /// The assignee does not belong to the task's project.
    #[error("user {user_id} is not a member of project {project_id}")]
    AssigneeNotMember {
        /// Task's project.
        project_id: ProjectId,
        /// Would-be assignee.
        user_id: UserId,
    },
    /// Project lookup failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserDirectoryError),
    /// Membership lookup failed.
    #[error(transparent)]
    Membership(#[from] MembershipRepositoryError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidStatus(_) | Self::InvalidPriority(_) => ErrorKind::InvalidArgument,
            Self::ProjectNotFound(_) | Self::UserNotFound(_) | Self::TaskNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::CreatorNotMember { .. } | Self::AssigneeNotMember { .. } => {
                ErrorKind::Forbidden
            }
            Self::Projects(err) => err.kind(),
            Self::Users(_) => ErrorKind::Internal,
            Self::Membership(err) => err.kind(),
            Self::Repository(err) => err.kind(),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<S, C>
where
    S: ProjectRepository + UserDirectory + MembershipRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    locks: Arc<ProjectLocks>,
}

impl<S, C> TaskLifecycleService<S, C>
where
    S: ProjectRepository + UserDirectory + MembershipRepository + TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>, locks: Arc<ProjectLocks>) -> Self {
        Self {
            store,
            clock,
            locks,
        }
    }

    /// Creates a task in the request's project on behalf of `creator_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::ProjectNotFound`] or
    /// [`TaskLifecycleError::UserNotFound`] for missing references,
    /// [`TaskLifecycleError::CreatorNotMember`] when the creator does not
    /// belong to the project and [`TaskLifecycleError::InvalidStatus`] or
    /// [`TaskLifecycleError::InvalidPriority`] for unknown labels.
    pub async fn create_task(
        &self,
        request: CreateTaskRequest,
        creator_id: UserId,
    ) -> TaskLifecycleResult<Task> {
        let lease = self.locks.acquire(request.project_id).await;
        self.create_task_locked(&lease, request, creator_id).await
    }

    /// Sets the status of a task from a label.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task is missing
    /// and [`TaskLifecycleError::InvalidStatus`] for an unknown label.
    pub async fn update_task_status(
        &self,
        task_id: TaskId,
        status: &str,
    ) -> TaskLifecycleResult<Task> {
        let lease = self.lease_for_task(task_id).await?;
        self.update_task_status_locked(&lease, task_id, status).await
    }

    /// Assigns a task to a member of its project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] or
    /// [`TaskLifecycleError::UserNotFound`] for missing references and
    /// [`TaskLifecycleError::AssigneeNotMember`] when the user does not
    /// belong to the task's project.
    pub async fn assign_task(&self, task_id: TaskId, user_id: UserId) -> TaskLifecycleResult<Task> {
        let lease = self.lease_for_task(task_id).await?;
        self.assign_task_locked(&lease, task_id, user_id).await
    }

    /// Deletes a task and its comments.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task is missing.
    pub async fn delete_task(&self, task_id: TaskId) -> TaskLifecycleResult<()> {
        let lease = self.lease_for_task(task_id).await?;
        self.delete_task_locked(&lease, task_id).await
    }

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when it does not exist.
    pub async fn find_task(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.store
            .find_task(task_id)
            .await?
            .ok_or(TaskLifecycleError::TaskNotFound(task_id))
    }

    /// Lists the tasks of a project in no guaranteed order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::ProjectNotFound`] when the project does
    /// not exist.
    pub async fn list_by_project(&self, project_id: ProjectId) -> TaskLifecycleResult<Vec<Task>> {
        if self.store.find_project(project_id).await?.is_none() {
            return Err(TaskLifecycleError::ProjectNotFound(project_id));
        }
        let tasks = self.store.list_tasks_by_project(project_id).await?;
        tracing::debug!(project_id = %project_id, count = tasks.len(), "listed project tasks");
        Ok(tasks)
    }

    /// Lists the tasks assigned to a user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list_by_assignee(&self, user_id: UserId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.store.list_tasks_by_assignee(user_id).await?)
    }

    /// Lists the tasks of a project whose status label equals `status`,
    /// ignoring case. An unknown label matches nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::ProjectNotFound`] when the project does
    /// not exist.
    pub async fn list_by_project_and_status(
        &self,
        project_id: ProjectId,
        status: &str,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.list_by_project(project_id).await?;
        Ok(tasks
            .into_iter()
            .filter(|task| task.status().matches_label(status))
            .collect())
    }

    pub(crate) async fn lease_for_task(
        &self,
        task_id: TaskId,
    ) -> TaskLifecycleResult<ProjectLease> {
        let project_id = self.find_task(task_id).await?.project_id();
        Ok(self.locks.acquire(project_id).await)
    }

    pub(crate) async fn create_task_locked(
        &self,
        lease: &ProjectLease,
        request: CreateTaskRequest,
        creator_id: UserId,
    ) -> TaskLifecycleResult<Task> {
        let project_id = lease.project_id();
        if self.store.find_project(project_id).await?.is_none() {
            return Err(TaskLifecycleError::ProjectNotFound(project_id));
        }
        self.require_user(creator_id).await?;
        if self
            .store
            .find_member(project_id, creator_id)
            .await?
            .is_none()
        {
            return Err(TaskLifecycleError::CreatorNotMember {
                project_id,
                user_id: creator_id,
            });
        }

        let CreateTaskRequest {
            title,
            description,
            status: status_label,
            priority: priority_label,
            assigned_to,
            due_date,
            ..
        } = request;
        let status = TaskStatus::parse_or_default(status_label.as_deref())?;
        let priority = TaskPriority::parse_or_default(priority_label.as_deref())?;
        if let Some(assignee) = assigned_to {
            self.require_user(assignee).await?;
        }

        let draft = TaskDraft {
            project_id,
            created_by: creator_id,
            assigned_to,
            title,
            description,
            status,
            priority,
            due_date,
        };
        let task = Task::new(draft, &*self.clock);
        self.store.store_task(&task).await?;
        tracing::info!(
            task_id = %task.id(),
            project_id = %project_id,
            created_by = %creator_id,
            status = %task.status(),
            "task created"
        );
        Ok(task)
    }

    pub(crate) async fn update_task_status_locked(
        &self,
        lease: &ProjectLease,
        task_id: TaskId,
        status: &str,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.task_in_lease(lease, task_id).await?;
        let new_status = TaskStatus::try_from(status)?;
        task.set_status(new_status, &*self.clock);
        self.store.update_task(&task).await?;
        tracing::info!(task_id = %task_id, status = %new_status, "task status updated");
        Ok(task)
    }

    pub(crate) async fn assign_task_locked(
        &self,
        lease: &ProjectLease,
        task_id: TaskId,
        user_id: UserId,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.task_in_lease(lease, task_id).await?;
        self.require_user(user_id).await?;
        let project_id = task.project_id();
        if self.store.find_member(project_id, user_id).await?.is_none() {
            return Err(TaskLifecycleError::AssigneeNotMember {
                project_id,
                user_id,
            });
        }

        task.assign(user_id, &*self.clock);
        self.store.update_task(&task).await?;
        tracing::info!(task_id = %task_id, assigned_to = %user_id, "task assigned");
        Ok(task)
    }

    pub(crate) async fn delete_task_locked(
        &self,
        lease: &ProjectLease,
        task_id: TaskId,
    ) -> TaskLifecycleResult<()> {
        self.task_in_lease(lease, task_id).await?;
        self.store.delete_task(task_id).await?;
        tracing::info!(task_id = %task_id, project_id = %lease.project_id(), "task deleted");
        Ok(())
    }

    async fn task_in_lease(
        &self,
        lease: &ProjectLease,
        task_id: TaskId,
    ) -> TaskLifecycleResult<Task> {
        // Tasks never move between projects, so a mismatch means the id is stale.
        self.store
            .find_task(task_id)
            .await?
            .filter(|task| task.project_id() == lease.project_id())
            .ok_or(TaskLifecycleError::TaskNotFound(task_id))
    }

    async fn require_user(&self, user_id: UserId) -> TaskLifecycleResult<()> {
        self.store
            .find_user(user_id)
            .await?
            .map(|_| ())
            .ok_or(TaskLifecycleError::UserNotFound(user_id))
    }
}
