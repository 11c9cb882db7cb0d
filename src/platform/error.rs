//! Errors surfaced by the public operation surface.

use crate::collaboration::services::CollaborationServiceError;
use crate::comment::services::TaskCommentError;
use crate::error::ErrorKind;
use crate::identity::domain::UserId;
use crate::membership::services::MembershipServiceError;
use crate::project::{domain::ProjectId, services::ProjectServiceError};
use crate::task::{domain::TaskId, services::TaskLifecycleError};
use thiserror::Error;

/// Failure of a public operation.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Only callers with the `STUDENT` global role may create projects or
    /// send requests.
    #[error("user {0} is not a student")]
    NotAStudent(UserId),
    /// The caller is not the project's recorded creator.
    #[error("user {user_id} is not the creator of project {project_id}")]
    NotProjectCreator {
        /// Target project.
        project_id: ProjectId,
        /// Caller.
        user_id: UserId,
    },
    /// The caller does not belong to the project.
    #[error("user {user_id} is not a member of project {project_id}")]
    NotProjectMember {
        /// Target project.
        project_id: ProjectId,
        /// Caller.
        user_id: UserId,
    },
    /// The caller is not a `LEADER` or `MENTOR` of the project.
    #[error("user {user_id} is not a leader or mentor of project {project_id}")]
    NotProjectOwner {
        /// Target project.
        project_id: ProjectId,
        /// Caller.
        user_id: UserId,
    },
    /// The caller may not change the task.
    #[error("user {user_id} may not modify task {task_id}")]
    CannotModifyTask {
        /// Target task.
        task_id: TaskId,
        /// Caller.
        user_id: UserId,
    },
    /// The caller asked for another user's listing without admin rights.
    #[error("user {caller} may not read listings of user {target}")]
    NotSelf {
        /// Caller.
        caller: UserId,
        /// User whose listing was requested.
        target: UserId,
    },
    /// Project catalogue failure.
    #[error(transparent)]
    Projects(#[from] ProjectServiceError),
    /// Membership store failure.
    #[error(transparent)]
    Membership(#[from] MembershipServiceError),
    /// Collaboration workflow failure.
    #[error(transparent)]
    Collaboration(#[from] CollaborationServiceError),
    /// Task lifecycle failure.
    #[error(transparent)]
    Tasks(#[from] TaskLifecycleError),
    /// Comment log failure.
    #[error(transparent)]
    Comments(#[from] TaskCommentError),
}

impl PlatformError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotAStudent(_)
            | Self::NotProjectCreator { .. }
            | Self::NotProjectMember { .. }
            | Self::NotProjectOwner { .. }
            | Self::CannotModifyTask { .. }
            | Self::NotSelf { .. } => ErrorKind::Forbidden,
            Self::Projects(err) => err.kind(),
            Self::Membership(err) => err.kind(),
            Self::Collaboration(err) => err.kind(),
            Self::Tasks(err) => err.kind(),
            Self::Comments(err) => err.kind(),
        }
    }
}

/// Result type for public operations.
pub type PlatformResult<T> = Result<T, PlatformError>;
