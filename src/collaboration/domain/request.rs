//! Collaboration request aggregate.

use super::{CollaborationDomainError, RequestAction, RequestId, RequestStatus};
use crate::identity::domain::UserId;
use crate::project::domain::ProjectId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A student's application to join a project.
///
/// Independent of the membership store until approved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationRequest {
    id: RequestId,
    project_id: ProjectId,
    student_id: UserId,
    status: RequestStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CollaborationRequest {
    /// Creates a new `PENDING` request.
    #[must_use]
    pub fn new(project_id: ProjectId, student_id: UserId, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: RequestId::new(),
            project_id,
            student_id,
            status: RequestStatus::Pending,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the request identifier.
    #[must_use]
    pub const fn id(&self) -> RequestId {
        self.id
    }

    /// Returns the target project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the requesting student.
    #[must_use]
    pub const fn student_id(&self) -> UserId {
        self.student_id
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> RequestStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest status change timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies an owner decision.
    ///
    /// # Errors
    ///
    /// Returns [`CollaborationDomainError::InvalidStateTransition`] when the
    /// request is no longer pending. The request is left unchanged.
    pub fn decide(
        &mut self,
        action: RequestAction,
        clock: &impl Clock,
    ) -> Result<(), CollaborationDomainError> {
        let target = action.target_status();
        if self.status.is_terminal() {
            return Err(CollaborationDomainError::InvalidStateTransition {
                request_id: self.id,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        self.updated_at = clock.utc();
        Ok(())
    }
}
