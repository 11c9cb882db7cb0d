//! Service layer for project creation, revision and deletion.

use crate::config::PlatformConfig;
use crate::error::ErrorKind;
use crate::identity::{
    domain::UserId,
    ports::{UserDirectory, UserDirectoryError},
};
use crate::locking::ProjectLocks;
use crate::membership::{
    domain::{ProjectMember, ProjectRole},
    ports::{MembershipRepository, MembershipRepositoryError},
};
use crate::project::{
    domain::{
        ParseProjectStatusError, Project, ProjectDomainError, ProjectId, ProjectRevision,
        ProjectStatus, ProjectTitle,
    },
    ports::{ProjectRepository, ProjectRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    title: String,
    description: String,
    status: Option<String>,
    members_required: Option<u32>,
    deadline: Option<NaiveDate>,
}

impl CreateProjectRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: None,
            members_required: None,
            deadline: None,
        }
    }

    /// Sets the initial status label. Blank labels fall back to `OPEN`.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the required-member count.
    #[must_use]
    pub const fn with_members_required(mut self, count: u32) -> Self {
        self.members_required = Some(count);
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Request payload for revising a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProjectRequest {
    title: String,
    description: String,
    status: Option<String>,
    members_required: Option<u32>,
    deadline: Option<NaiveDate>,
}

impl UpdateProjectRequest {
    /// Creates a revision replacing title and description.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: None,
            members_required: None,
            deadline: None,
        }
    }

    /// Also replaces the status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Also replaces the required-member count.
    #[must_use]
    pub const fn with_members_required(mut self, count: u32) -> Self {
        self.members_required = Some(count);
        self
    }

    /// Also replaces the deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Service-level errors for project catalogue operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// The status label was not recognised.
    #[error(transparent)]
    InvalidStatus(#[from] ParseProjectStatusError),
    /// The project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    /// The user does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    /// The requester does not belong to the project.
    #[error("user {user_id} is not a member of project {project_id}")]
    NotAMember {
        /// Target project.
        project_id: ProjectId,
        /// Requesting user.
        user_id: UserId,
    },
    /// The requester is a member without `LEADER` or `MENTOR` role.
    #[error("user {user_id} holds {role} on project {project_id}; leader or mentor required")]
    InsufficientRole {
        /// Target project.
        project_id: ProjectId,
        /// Requesting user.
        user_id: UserId,
        /// Role actually held.
        role: ProjectRole,
    },
    /// Project repository operation failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserDirectoryError),
    /// Membership repository operation failed.
    #[error(transparent)]
    Membership(#[from] MembershipRepositoryError),
}

impl ProjectServiceError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) | Self::InvalidStatus(_) => ErrorKind::InvalidArgument,
            Self::ProjectNotFound(_) | Self::UserNotFound(_) => ErrorKind::NotFound,
            Self::NotAMember { .. } | Self::InsufficientRole { .. } => ErrorKind::Forbidden,
            Self::Projects(err) => err.kind(),
            Self::Users(_) => ErrorKind::Internal,
            Self::Membership(err) => err.kind(),
        }
    }
}

/// Result type for project catalogue operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Project catalogue orchestration service.
#[derive(Clone)]
pub struct ProjectService<S, C>
where
    S: ProjectRepository + UserDirectory + MembershipRepository,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    locks: Arc<ProjectLocks>,
    config: PlatformConfig,
}

impl<S, C> ProjectService<S, C>
where
    S: ProjectRepository + UserDirectory + MembershipRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new project catalogue service.
    #[must_use]
    pub const fn new(
        store: Arc<S>,
        clock: Arc<C>,
        locks: Arc<ProjectLocks>,
        config: PlatformConfig,
    ) -> Self {
        Self {
            store,
            clock,
            locks,
            config,
        }
    }

    /// Creates a project and records its creator as `LEADER`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::UserNotFound`] for an unknown creator,
    /// [`ProjectServiceError::Domain`] for a blank title and
    /// [`ProjectServiceError::InvalidStatus`] for an unknown status label.
    pub async fn create_project(
        &self,
        request: CreateProjectRequest,
        creator_id: UserId,
    ) -> ProjectServiceResult<Project> {
        let CreateProjectRequest {
            title,
            description,
            status,
            members_required,
            deadline,
        } = request;

        if self.store.find_user(creator_id).await?.is_none() {
            return Err(ProjectServiceError::UserNotFound(creator_id));
        }
        let validated_title = ProjectTitle::new(title)?;
        let initial_status = ProjectStatus::parse_or_open(status.as_deref())?;
        let team_size = members_required.unwrap_or(self.config.default_members_required);

        let mut project = Project::new(
            validated_title,
            description,
            creator_id,
            team_size,
            &*self.clock,
        )
        .with_status(initial_status);
        if let Some(date) = deadline {
            project = project.with_deadline(date);
        }

        self.store.store_project(&project).await?;
        let leader = ProjectMember::new(
            project.id(),
            creator_id,
            ProjectRole::Leader,
            &*self.clock,
        );
        if let Err(err) = self.store.store_member(&leader).await {
            self.store.delete_project(project.id()).await?;
            return Err(err.into());
        }

        tracing::info!(
            project_id = %project.id(),
            creator_id = %creator_id,
            "project created"
        );
        Ok(project)
    }

    /// Finds a project by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::ProjectNotFound`] when it does not
    /// exist.
    pub async fn find_project(&self, project_id: ProjectId) -> ProjectServiceResult<Project> {
        self.store
            .find_project(project_id)
            .await?
            .ok_or(ProjectServiceError::ProjectNotFound(project_id))
    }

    /// Returns every project in no guaranteed order.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Projects`] when the lookup fails.
    pub async fn list_projects(&self) -> ProjectServiceResult<Vec<Project>> {
        let projects = self.store.list_projects().await?;
        tracing::debug!(count = projects.len(), "listed projects");
        Ok(projects)
    }

    /// Returns every project the user belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Membership`] or
    /// [`ProjectServiceError::Projects`] when a lookup fails.
    pub async fn list_projects_for_member(
        &self,
        user_id: UserId,
    ) -> ProjectServiceResult<Vec<Project>> {
        let memberships = self.store.list_memberships_for_user(user_id).await?;
        let mut projects = Vec::with_capacity(memberships.len());
        for membership in memberships {
            if let Some(project) = self.store.find_project(membership.project_id()).await? {
                projects.push(project);
            }
        }
        Ok(projects)
    }

    /// Revises a project. Only `LEADER` or `MENTOR` members may do so.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::ProjectNotFound`] or
    /// [`ProjectServiceError::UserNotFound`] for missing references,
    /// [`ProjectServiceError::NotAMember`] or
    /// [`ProjectServiceError::InsufficientRole`] when the requester may not
    /// act, and validation errors for the new values.
    pub async fn update_project(
        &self,
        project_id: ProjectId,
        request: UpdateProjectRequest,
        requester_id: UserId,
    ) -> ProjectServiceResult<Project> {
        let UpdateProjectRequest {
            title,
            description,
            status,
            members_required,
            deadline,
        } = request;

        let _lease = self.locks.acquire(project_id).await;
        let mut project = self.find_project(project_id).await?;
        self.require_owner_role(project_id, requester_id).await?;

        let revision = ProjectRevision {
            title: ProjectTitle::new(title)?,
            description,
            status: status.as_deref().map(ProjectStatus::try_from).transpose()?,
            members_required,
            deadline,
        };
        project.revise(revision, &*self.clock);
        self.store.update_project(&project).await?;
        tracing::info!(project_id = %project_id, requester_id = %requester_id, "project updated");
        Ok(project)
    }

    /// Deletes a project and everything it owns. Only `LEADER` or `MENTOR`
    /// members may do so.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::ProjectNotFound`] or
    /// [`ProjectServiceError::UserNotFound`] for missing references and
    /// [`ProjectServiceError::NotAMember`] or
    /// [`ProjectServiceError::InsufficientRole`] when the requester may not
    /// act.
    pub async fn delete_project(
        &self,
        project_id: ProjectId,
        requester_id: UserId,
    ) -> ProjectServiceResult<()> {
        let _lease = self.locks.acquire(project_id).await;
        self.find_project(project_id).await?;
        self.require_owner_role(project_id, requester_id).await?;

        self.store.delete_project(project_id).await?;
        tracing::info!(project_id = %project_id, requester_id = %requester_id, "project deleted");
        Ok(())
    }

    async fn require_owner_role(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> ProjectServiceResult<()> {
        if self.store.find_user(user_id).await?.is_none() {
            return Err(ProjectServiceError::UserNotFound(user_id));
        }
        let member = self
            .store
            .find_member(project_id, user_id)
            .await?
            .ok_or(ProjectServiceError::NotAMember {
                project_id,
                user_id,
            })?;
        if !member.role().is_owner_role() {
            tracing::warn!(
                project_id = %project_id,
                user_id = %user_id,
                role = %member.role(),
                "project change denied"
            );
            return Err(ProjectServiceError::InsufficientRole {
                project_id,
                user_id,
                role: member.role(),
            });
        }
        Ok(())
    }
}
