//! Repository port for project membership persistence.

use crate::error::ErrorKind;
use crate::identity::domain::UserId;
use crate::membership::domain::ProjectMember;
use crate::project::domain::ProjectId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for membership repository operations.
pub type MembershipRepositoryResult<T> = Result<T, MembershipRepositoryError>;

/// Membership persistence contract.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Stores a new membership.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipRepositoryError::DuplicateMember`] when the
    /// (project, user) pair already exists.
    async fn store_member(&self, member: &ProjectMember) -> MembershipRepositoryResult<()>;

    /// Removes a membership.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipRepositoryError::NotFound`] when the pair does not
    /// exist.
    async fn delete_member(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> MembershipRepositoryResult<()>;

    /// Finds the membership of `user_id` in `project_id`.
    ///
    /// Returns `None` when the user is not a member.
    async fn find_member(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> MembershipRepositoryResult<Option<ProjectMember>>;

    /// Returns all members of a project in no guaranteed order.
    async fn list_members(
        &self,
        project_id: ProjectId,
    ) -> MembershipRepositoryResult<Vec<ProjectMember>>;

    /// Returns every membership held by a user.
    async fn list_memberships_for_user(
        &self,
        user_id: UserId,
    ) -> MembershipRepositoryResult<Vec<ProjectMember>>;
}

/// Errors returned by membership repository implementations.
#[derive(Debug, Clone, Error)]
pub enum MembershipRepositoryError {
    /// The user already belongs to the project.
    #[error("user {user_id} is already a member of project {project_id}")]
    DuplicateMember {
        /// Project of the existing membership.
        project_id: ProjectId,
        /// User of the existing membership.
        user_id: UserId,
    },

    /// The membership was not found.
    #[error("user {user_id} is not a member of project {project_id}")]
    NotFound {
        /// Project searched.
        project_id: ProjectId,
        /// User searched.
        user_id: UserId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MembershipRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateMember { .. } => ErrorKind::Conflict,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Persistence(_) => ErrorKind::Internal,
        }
    }
}
