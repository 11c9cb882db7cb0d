//! Repository port for collaboration request persistence.

use crate::collaboration::domain::{CollaborationRequest, RequestId};
use crate::error::ErrorKind;
use crate::identity::domain::UserId;
use crate::project::domain::ProjectId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for collaboration request repository operations.
pub type CollaborationRequestRepositoryResult<T> =
    Result<T, CollaborationRequestRepositoryError>;

/// Collaboration request persistence contract.
#[async_trait]
pub trait CollaborationRequestRepository: Send + Sync {
    /// Stores a new request.
    ///
    /// # Errors
    ///
    /// Returns [`CollaborationRequestRepositoryError::DuplicateRequest`] when
    /// any request already exists for the (project, student) pair, whatever
    /// its status.
    async fn store_request(
        &self,
        request: &CollaborationRequest,
    ) -> CollaborationRequestRepositoryResult<()>;

    /// Persists a status change.
    ///
    /// # Errors
    ///
    /// Returns [`CollaborationRequestRepositoryError::NotFound`] when the
    /// request does not exist.
    async fn update_request(
        &self,
        request: &CollaborationRequest,
    ) -> CollaborationRequestRepositoryResult<()>;

    /// Finds a request by identifier.
    async fn find_request(
        &self,
        id: RequestId,
    ) -> CollaborationRequestRepositoryResult<Option<CollaborationRequest>>;

    /// Finds the request for a (project, student) pair, if any.
    async fn find_request_for_pair(
        &self,
        project_id: ProjectId,
        student_id: UserId,
    ) -> CollaborationRequestRepositoryResult<Option<CollaborationRequest>>;

    /// Returns all requests targeting a project.
    async fn list_requests_by_project(
        &self,
        project_id: ProjectId,
    ) -> CollaborationRequestRepositoryResult<Vec<CollaborationRequest>>;

    /// Returns all requests sent by a student.
    async fn list_requests_by_student(
        &self,
        student_id: UserId,
    ) -> CollaborationRequestRepositoryResult<Vec<CollaborationRequest>>;
}

/// Errors returned by collaboration request repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CollaborationRequestRepositoryError {
    /// A request already exists for the pair.
    #[error("a collaboration request already exists for student {student_id} on project {project_id}")]
    DuplicateRequest {
        /// Target project.
        project_id: ProjectId,
        /// Requesting student.
        student_id: UserId,
    },

    /// The request was not found.
    #[error("collaboration request not found: {0}")]
    NotFound(RequestId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CollaborationRequestRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateRequest { .. } => ErrorKind::Conflict,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Persistence(_) => ErrorKind::Internal,
        }
    }
}
