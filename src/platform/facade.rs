//! Guarded entry points for every public operation.

use super::{PlatformError, PlatformResult};
use crate::authorization::ProjectAuthorizer;
use crate::collaboration::{
    domain::{CollaborationRequest, CollaborationRequestView, RequestId},
    ports::CollaborationRequestRepository,
    services::CollaborationService,
};
use crate::comment::{
    domain::TaskComment,
    ports::TaskCommentRepository,
    services::TaskCommentService,
};
use crate::config::PlatformConfig;
use crate::identity::{
    domain::{CallerIdentity, GlobalRole, UserId},
    ports::UserDirectory,
};
use crate::locking::ProjectLocks;
use crate::membership::{
    domain::{ProjectMember, ProjectRole},
    ports::MembershipRepository,
    services::MembershipService,
};
use crate::project::{
    domain::{Project, ProjectId},
    ports::ProjectRepository,
    services::{CreateProjectRequest, ProjectService, UpdateProjectRequest},
};
use crate::task::{
    domain::{Task, TaskId},
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskLifecycleService},
};
use mockable::Clock;
use std::sync::Arc;

/// Storage backing every bounded context at once.
pub trait CampusStore:
    UserDirectory
    + ProjectRepository
    + MembershipRepository
    + CollaborationRequestRepository
    + TaskRepository
    + TaskCommentRepository
{
}

impl<T> CampusStore for T where
    T: UserDirectory
        + ProjectRepository
        + MembershipRepository
        + CollaborationRequestRepository
        + TaskRepository
        + TaskCommentRepository
{
}

/// Caller-aware facade over the project, membership, collaboration, task and
/// comment services.
#[derive(Clone)]
pub struct CollaborationPlatform<S, C>
where
    S: CampusStore,
    C: Clock + Send + Sync,
{
    config: PlatformConfig,
    locks: Arc<ProjectLocks>,
    authorizer: ProjectAuthorizer<S>,
    projects: ProjectService<S, C>,
    membership: MembershipService<S, C>,
    collaboration: CollaborationService<S, C>,
    tasks: TaskLifecycleService<S, C>,
    comments: TaskCommentService<S, C>,
}

impl<S, C> CollaborationPlatform<S, C>
where
    S: CampusStore,
    C: Clock + Send + Sync,
{
    /// Wires every service over one store, one clock and one lock registry.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>, config: PlatformConfig) -> Self {
        let locks = Arc::new(ProjectLocks::new());
        Self {
            authorizer: ProjectAuthorizer::new(Arc::clone(&store)),
            projects: ProjectService::new(
                Arc::clone(&store),
                Arc::clone(&clock),
                Arc::clone(&locks),
                config.clone(),
            ),
            membership: MembershipService::new(
                Arc::clone(&store),
                Arc::clone(&clock),
                Arc::clone(&locks),
            ),
            collaboration: CollaborationService::new(
                Arc::clone(&store),
                Arc::clone(&clock),
                Arc::clone(&locks),
            ),
            tasks: TaskLifecycleService::new(
                Arc::clone(&store),
                Arc::clone(&clock),
                Arc::clone(&locks),
            ),
            comments: TaskCommentService::new(store, clock),
            locks,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &PlatformConfig {
        &self.config
    }

    /// Returns the guard evaluator used by this facade.
    #[must_use]
    pub const fn authorizer(&self) -> &ProjectAuthorizer<S> {
        &self.authorizer
    }

    // Projects

    /// Creates a project with the caller as creator and first `LEADER`.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NotAStudent`] unless the caller holds the
    /// `STUDENT` global role.
    pub async fn create_project(
        &self,
        caller: &CallerIdentity,
        request: CreateProjectRequest,
    ) -> PlatformResult<Project> {
        ensure_student(caller)?;
        Ok(self
            .projects
            .create_project(request, caller.user_id())
            .await?)
    }

    /// Returns a project by identifier.
    ///
    /// # Errors
    ///
    /// Propagates [`PlatformError::Projects`].
    pub async fn find_project(&self, project_id: ProjectId) -> PlatformResult<Project> {
        Ok(self.projects.find_project(project_id).await?)
    }

    /// Lists every project. Open to any caller.
    ///
    /// # Errors
    ///
    /// Propagates [`PlatformError::Projects`].
    pub async fn list_projects(&self) -> PlatformResult<Vec<Project>> {
        Ok(self.projects.list_projects().await?)
    }

    /// Lists the projects the caller belongs to.
    ///
    /// # Errors
    ///
    /// Propagates [`PlatformError::Projects`].
    pub async fn list_my_projects(
        &self,
        caller: &CallerIdentity,
    ) -> PlatformResult<Vec<Project>> {
        Ok(self
            .projects
            .list_projects_for_member(caller.user_id())
            .await?)
    }

    /// Revises a project. The caller must be a `LEADER` or `MENTOR`.
    ///
    /// # Errors
    ///
    /// Propagates [`PlatformError::Projects`].
    pub async fn update_project(
        &self,
        caller: &CallerIdentity,
        project_id: ProjectId,
        request: UpdateProjectRequest,
    ) -> PlatformResult<Project> {
        Ok(self
            .projects
            .update_project(project_id, request, caller.user_id())
            .await?)
    }

    /// Deletes a project and everything it owns. The caller must be a
    /// `LEADER` or `MENTOR`.
    ///
    /// # Errors
    ///
    /// Propagates [`PlatformError::Projects`].
    pub async fn delete_project(
        &self,
        caller: &CallerIdentity,
        project_id: ProjectId,
    ) -> PlatformResult<()> {
        Ok(self
            .projects
            .delete_project(project_id, caller.user_id())
            .await?)
    }

    // Collaboration requests

    /// Sends a request from the caller to join a project.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NotAStudent`] unless the caller holds the
    /// `STUDENT` global role.
    pub async fn send_request(
        &self,
        caller: &CallerIdentity,
        project_id: ProjectId,
    ) -> PlatformResult<CollaborationRequest> {
        ensure_student(caller)?;
        let lease = self.locks.acquire(project_id).await;
        Ok(self
            .collaboration
            .send_request_locked(&lease, caller.user_id())
            .await?)
    }

    /// Approves or rejects a request as the caller.
    ///
    /// # Errors
    ///
    /// Propagates [`PlatformError::Collaboration`]; a caller other than the
    /// project creator is rejected there.
    pub async fn respond_to_request(
        &self,
        caller: &CallerIdentity,
        request_id: RequestId,
        action: &str,
    ) -> PlatformResult<CollaborationRequest> {
        Ok(self
            .collaboration
            .respond_to_request(request_id, caller.user_id(), action)
            .await?)
    }

    /// Lists the requests targeting a project the caller created.
    ///
    /// # Errors
    ///
    /// Propagates [`PlatformError::Collaboration`].
    pub async fn list_requests_by_project(
        &self,
        caller: &CallerIdentity,
        project_id: ProjectId,
    ) -> PlatformResult<Vec<CollaborationRequestView>> {
        Ok(self
            .collaboration
            .list_by_project(project_id, caller.user_id())
            .await?)
    }

    /// Lists the requests sent by `student_id`.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NotSelf`] when the caller asks for another
    /// student's requests without the admin override.
    pub async fn list_requests_by_student(
        &self,
        caller: &CallerIdentity,
        student_id: UserId,
    ) -> PlatformResult<Vec<CollaborationRequestView>> {
        self.ensure_self_or_admin(caller, student_id)?;
        Ok(self.collaboration.list_by_student(student_id).await?)
    }

    // Membership

    /// Lists the members of a project. Open to any caller.
    ///
    /// # Errors
    ///
    /// Propagates [`PlatformError::Membership`].
    pub async fn list_members(
        &self,
        caller: &CallerIdentity,
        project_id: ProjectId,
    ) -> PlatformResult<Vec<ProjectMember>> {
        tracing::debug!(project_id = %project_id, caller = %caller.user_id(), "listing members");
        Ok(self.membership.list_members(project_id).await?)
    }

    /// Adds a member. Only the project creator may do so.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Membership`] when the project does not exist
    /// and [`PlatformError::NotProjectCreator`] when the caller did not create
    /// it.
    pub async fn add_member(
        &self,
        caller: &CallerIdentity,
        project_id: ProjectId,
        user_id: UserId,
        role: Option<&str>,
    ) -> PlatformResult<ProjectMember> {
        let lease = self.locks.acquire(project_id).await;
        self.membership.require_project_locked(&lease).await?;
        self.ensure_creator(caller, project_id).await?;
        let resolved = ProjectRole::from_label_or_member(role);
        Ok(self
            .membership
            .add_member_locked(&lease, user_id, resolved)
            .await?)
    }

    /// Removes a member. Only the project creator may do so.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Membership`] when the project does not exist
    /// and [`PlatformError::NotProjectCreator`] when the caller did not create
    /// it.
    pub async fn remove_member(
        &self,
        caller: &CallerIdentity,
        project_id: ProjectId,
        user_id: UserId,
    ) -> PlatformResult<()> {
        let lease = self.locks.acquire(project_id).await;
        self.membership.require_project_locked(&lease).await?;
        self.ensure_creator(caller, project_id).await?;
        Ok(self
            .membership
            .remove_member_locked(&lease, user_id)
            .await?)
    }

    // Tasks

    /// Creates a task as the caller, who must be a project member.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NotProjectMember`] when the caller does not
    /// belong to the project.
    pub async fn create_task(
        &self,
        caller: &CallerIdentity,
        request: CreateTaskRequest,
    ) -> PlatformResult<Task> {
        let lease = self.locks.acquire(request.project_id()).await;
        self.ensure_member(caller, lease.project_id()).await?;
        Ok(self
            .tasks
            .create_task_locked(&lease, request, caller.user_id())
            .await?)
    }

    /// Sets a task's status. Any member of the task's project may do so.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::CannotModifyTask`] when the caller may not
    /// change the task.
    pub async fn update_task_status(
        &self,
        caller: &CallerIdentity,
        task_id: TaskId,
        status: &str,
    ) -> PlatformResult<Task> {
        let lease = self.tasks.lease_for_task(task_id).await?;
        self.ensure_can_modify(caller, task_id).await?;
        Ok(self
            .tasks
            .update_task_status_locked(&lease, task_id, status)
            .await?)
    }

    /// Assigns a task. The caller must be a `LEADER` or `MENTOR` of the
    /// task's project.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NotProjectOwner`] when the caller lacks an
    /// owner role.
    pub async fn assign_task(
        &self,
        caller: &CallerIdentity,
        task_id: TaskId,
        user_id: UserId,
    ) -> PlatformResult<Task> {
        let lease = self.tasks.lease_for_task(task_id).await?;
        let project_id = lease.project_id();
        if !self
            .authorizer
            .is_project_owner(caller.user_id(), project_id)
            .await
        {
            return Err(deny(PlatformError::NotProjectOwner {
                project_id,
                user_id: caller.user_id(),
            }));
        }
        Ok(self
            .tasks
            .assign_task_locked(&lease, task_id, user_id)
            .await?)
    }

    /// Deletes a task and its comments. Any member of the task's project may
    /// do so.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::CannotModifyTask`] when the caller may not
    /// change the task.
    pub async fn delete_task(
        &self,
        caller: &CallerIdentity,
        task_id: TaskId,
    ) -> PlatformResult<()> {
        let lease = self.tasks.lease_for_task(task_id).await?;
        self.ensure_can_modify(caller, task_id).await?;
        Ok(self.tasks.delete_task_locked(&lease, task_id).await?)
    }

    /// Lists a project's tasks for a member.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NotProjectMember`] when the caller does not
    /// belong to the project.
    pub async fn list_tasks_by_project(
        &self,
        caller: &CallerIdentity,
        project_id: ProjectId,
    ) -> PlatformResult<Vec<Task>> {
        self.ensure_member(caller, project_id).await?;
        Ok(self.tasks.list_by_project(project_id).await?)
    }

    /// Lists a project's tasks with the given status label for a member.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NotProjectMember`] when the caller does not
    /// belong to the project.
    pub async fn list_tasks_by_project_and_status(
        &self,
        caller: &CallerIdentity,
        project_id: ProjectId,
        status: &str,
    ) -> PlatformResult<Vec<Task>> {
        self.ensure_member(caller, project_id).await?;
        Ok(self
            .tasks
            .list_by_project_and_status(project_id, status)
            .await?)
    }

    /// Lists the tasks assigned to `assignee`.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NotSelf`] when the caller asks for another
    /// user's tasks without the admin override.
    pub async fn list_tasks_by_assignee(
        &self,
        caller: &CallerIdentity,
        assignee: UserId,
    ) -> PlatformResult<Vec<Task>> {
        self.ensure_self_or_admin(caller, assignee)?;
        Ok(self.tasks.list_by_assignee(assignee).await?)
    }

    // Comments

    /// Adds a comment authored by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NotProjectMember`] when the caller does not
    /// belong to the task's project.
    pub async fn add_comment(
        &self,
        caller: &CallerIdentity,
        task_id: TaskId,
        content: &str,
    ) -> PlatformResult<TaskComment> {
        let task = self.comments.require_task(task_id).await?;
        let lease = self.locks.acquire(task.project_id()).await;
        self.ensure_member(caller, lease.project_id()).await?;
        Ok(self
            .comments
            .add_comment_locked(&lease, task_id, caller.user_id(), content)
            .await?)
    }

    /// Lists the comments on a task for a member of its project.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NotProjectMember`] when the caller does not
    /// belong to the task's project.
    pub async fn list_comments_by_task(
        &self,
        caller: &CallerIdentity,
        task_id: TaskId,
    ) -> PlatformResult<Vec<TaskComment>> {
        let task = self.comments.require_task(task_id).await?;
        self.ensure_member(caller, task.project_id()).await?;
        Ok(self.comments.list_by_task(task_id).await?)
    }

    async fn ensure_creator(
        &self,
        caller: &CallerIdentity,
        project_id: ProjectId,
    ) -> PlatformResult<()> {
        if self
            .authorizer
            .is_project_creator(caller.user_id(), project_id)
            .await
        {
            return Ok(());
        }
        Err(deny(PlatformError::NotProjectCreator {
            project_id,
            user_id: caller.user_id(),
        }))
    }

    async fn ensure_member(
        &self,
        caller: &CallerIdentity,
        project_id: ProjectId,
    ) -> PlatformResult<()> {
        if self
            .authorizer
            .is_project_member(caller.user_id(), project_id)
            .await
        {
            return Ok(());
        }
        Err(deny(PlatformError::NotProjectMember {
            project_id,
            user_id: caller.user_id(),
        }))
    }

    async fn ensure_can_modify(
        &self,
        caller: &CallerIdentity,
        task_id: TaskId,
    ) -> PlatformResult<()> {
        if self
            .authorizer
            .can_modify_task(caller.user_id(), task_id)
            .await
        {
            return Ok(());
        }
        Err(deny(PlatformError::CannotModifyTask {
            task_id,
            user_id: caller.user_id(),
        }))
    }

    fn ensure_self_or_admin(&self, caller: &CallerIdentity, target: UserId) -> PlatformResult<()> {
        if caller.user_id() == target || (self.config.admin_override && caller.is_admin()) {
            return Ok(());
        }
        Err(deny(PlatformError::NotSelf {
            caller: caller.user_id(),
            target,
        }))
    }
}

fn ensure_student(caller: &CallerIdentity) -> PlatformResult<()> {
    if caller.global_role() == GlobalRole::Student {
        return Ok(());
    }
    Err(deny(PlatformError::NotAStudent(caller.user_id())))
}

fn deny(err: PlatformError) -> PlatformError {
    tracing::warn!(error = %err, "access denied");
    err
}
