//! Service layer for listing, adding and removing project members.

use crate::error::ErrorKind;
use crate::identity::{
    domain::UserId,
    ports::{UserDirectory, UserDirectoryError},
};
use crate::locking::{ProjectLease, ProjectLocks};
use crate::membership::{
    domain::{ProjectMember, ProjectRole},
    ports::{MembershipRepository, MembershipRepositoryError},
};
use crate::project::{
    domain::ProjectId,
    ports::{ProjectRepository, ProjectRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for membership operations.
#[derive(Debug, Error)]
pub enum MembershipServiceError {
    /// The project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    /// The user does not exist.
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    /// The user already belongs to the project.
    #[error("user {user_id} is already a member of project {project_id}")]
    AlreadyMember {
        /// Target project.
        project_id: ProjectId,
        /// Existing member.
        user_id: UserId,
    },
    /// The user does not belong to the project.
    #[error("user {user_id} is not a member of project {project_id}")]
    MemberNotFound {
        /// Target project.
        project_id: ProjectId,
        /// Missing member.
        user_id: UserId,
    },
    /// Project lookup failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserDirectoryError),
    /// Membership repository operation failed.
    #[error(transparent)]
    Repository(#[from] MembershipRepositoryError),
}

impl MembershipServiceError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ProjectNotFound(_) | Self::UserNotFound(_) | Self::MemberNotFound { .. } => {
                ErrorKind::NotFound
            }
            Self::AlreadyMember { .. } => ErrorKind::Conflict,
            Self::Projects(err) => err.kind(),
            Self::Users(_) => ErrorKind::Internal,
            Self::Repository(err) => err.kind(),
        }
    }
}

/// Result type for membership service operations.
pub type MembershipServiceResult<T> = Result<T, MembershipServiceError>;

/// Membership store orchestration service.
#[derive(Clone)]
pub struct MembershipService<S, C>
where
    S: ProjectRepository + UserDirectory + MembershipRepository,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    locks: Arc<ProjectLocks>,
}

impl<S, C> MembershipService<S, C>
where
    S: ProjectRepository + UserDirectory + MembershipRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new membership service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>, locks: Arc<ProjectLocks>) -> Self {
        Self {
            store,
            clock,
            locks,
        }
    }

    /// Returns all members of a project in no guaranteed order.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipServiceError::ProjectNotFound`] when the project
    /// does not exist.
    pub async fn list_members(
        &self,
        project_id: ProjectId,
    ) -> MembershipServiceResult<Vec<ProjectMember>> {
        if self.store.find_project(project_id).await?.is_none() {
            return Err(MembershipServiceError::ProjectNotFound(project_id));
        }
        Ok(self.store.list_members(project_id).await?)
    }

    /// Adds `user_id` to a project.
    ///
    /// `role` defaults to `MEMBER` when absent or unrecognised.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipServiceError::ProjectNotFound`] or
    /// [`MembershipServiceError::UserNotFound`] for missing references and
    /// [`MembershipServiceError::AlreadyMember`] for an existing pair.
    pub async fn add_member(
        &self,
        project_id: ProjectId,
        user_id: UserId,
        role: Option<&str>,
    ) -> MembershipServiceResult<ProjectMember> {
        let resolved = ProjectRole::from_label_or_member(role);
        let lease = self.locks.acquire(project_id).await;
        self.add_member_locked(&lease, user_id, resolved).await
    }

    /// Removes `user_id` from a project.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipServiceError::MemberNotFound`] when the pairing
    /// does not exist.
    pub async fn remove_member(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> MembershipServiceResult<()> {
        let lease = self.locks.acquire(project_id).await;
        self.remove_member_locked(&lease, user_id).await
    }

    /// Returns `true` when `user_id` belongs to the project.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipServiceError::Repository`] when the lookup fails.
    pub async fn is_member(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> MembershipServiceResult<bool> {
        Ok(self.role_of(project_id, user_id).await?.is_some())
    }

    /// Returns the role `user_id` holds in the project, if any.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipServiceError::Repository`] when the lookup fails.
    pub async fn role_of(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> MembershipServiceResult<Option<ProjectRole>> {
        let member = self.store.find_member(project_id, user_id).await?;
        Ok(member.map(|found| found.role()))
    }

    /// Confirms the leased project still exists.
    pub(crate) async fn require_project_locked(
        &self,
        lease: &ProjectLease,
    ) -> MembershipServiceResult<()> {
        let project_id = lease.project_id();
        if self.store.find_project(project_id).await?.is_none() {
            return Err(MembershipServiceError::ProjectNotFound(project_id));
        }
        Ok(())
    }

    pub(crate) async fn add_member_locked(
        &self,
        lease: &ProjectLease,
        user_id: UserId,
        role: ProjectRole,
    ) -> MembershipServiceResult<ProjectMember> {
        let project_id = lease.project_id();
        self.require_project_locked(lease).await?;
        if self.store.find_user(user_id).await?.is_none() {
            return Err(MembershipServiceError::UserNotFound(user_id));
        }
        if self
            .store
            .find_member(project_id, user_id)
            .await?
            .is_some()
        {
            return Err(MembershipServiceError::AlreadyMember {
                project_id,
                user_id,
            });
        }

        let member = ProjectMember::new(project_id, user_id, role, &*self.clock);
        self.store.store_member(&member).await?;
        tracing::info!(
            project_id = %project_id,
            user_id = %user_id,
            role = %role,
            "member added"
        );
        Ok(member)
    }

    pub(crate) async fn remove_member_locked(
        &self,
        lease: &ProjectLease,
        user_id: UserId,
    ) -> MembershipServiceResult<()> {
        let project_id = lease.project_id();
        if self
            .store
            .find_member(project_id, user_id)
            .await?
            .is_none()
        {
            return Err(MembershipServiceError::MemberNotFound {
                project_id,
                user_id,
            });
        }
        self.store.delete_member(project_id, user_id).await?;
        tracing::info!(project_id = %project_id, user_id = %user_id, "member removed");
        Ok(())
    }
}
