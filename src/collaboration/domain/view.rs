//! Listing projection of a collaboration request.

use super::{CollaborationRequest, RequestId, RequestStatus};
use crate::identity::domain::{User, UserId};
use crate::project::domain::{Project, ProjectId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request joined with the project title and student name for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationRequestView {
    /// Request identifier.
    pub request_id: RequestId,
    /// Target project.
    pub project_id: ProjectId,
    /// Target project title, when the project still exists.
    pub project_title: Option<String>,
    /// Requesting student.
    pub student_id: UserId,
    /// Requesting student's name, when the directory still knows them.
    pub student_name: Option<String>,
    /// Current status.
    pub status: RequestStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl CollaborationRequestView {
    /// Builds the view from a request and whatever related records resolved.
    #[must_use]
    pub fn new(
        request: &CollaborationRequest,
        project: Option<&Project>,
        student: Option<&User>,
    ) -> Self {
        Self {
            request_id: request.id(),
            project_id: request.project_id(),
            project_title: project.map(|found| found.title().as_str().to_owned()),
            student_id: request.student_id(),
            student_name: student.map(|found| found.name().to_owned()),
            status: request.status(),
            created_at: request.created_at(),
        }
    }
}
