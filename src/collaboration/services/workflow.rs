//! Service layer for sending, deciding and listing collaboration requests.

use crate::collaboration::{
    domain::{
        CollaborationDomainError, CollaborationRequest, CollaborationRequestView,
        ParseRequestActionError, RequestAction, RequestId,
    },
    ports::{CollaborationRequestRepository, CollaborationRequestRepositoryError},
};
use crate::error::ErrorKind;
use crate::identity::{
    domain::UserId,
    ports::{UserDirectory, UserDirectoryError},
};
use crate::locking::{ProjectLease, ProjectLocks};
use crate::membership::{
    domain::ProjectRole,
    ports::{MembershipRepository, MembershipRepositoryError},
    services::{MembershipService, MembershipServiceError},
};
use crate::project::{
    domain::{Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for the collaboration request workflow.
#[derive(Debug, Error)]
pub enum CollaborationServiceError {
    /// The request has already been decided.
    #[error(transparent)]
    Domain(#[from] CollaborationDomainError),
    /// The decision label was neither `approve` nor `reject`.
    #[error(transparent)]
    InvalidAction(#[from] ParseRequestActionError),
    /// The project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    /// The student does not exist.
    #[error("student not found: {0}")]
    StudentNotFound(UserId),
    /// The request does not exist.
    #[error("collaboration request not found: {0}")]
    RequestNotFound(RequestId),
    /// A request already exists for the pair.
    #[error("a collaboration request already exists for student {student_id} on project {project_id}")]
    DuplicateRequest {
        /// Target project.
        project_id: ProjectId,
        /// Requesting student.
        student_id: UserId,
    },
    /// The student already belongs to the project.
    #[error("student {student_id} is already a member of project {project_id}")]
    AlreadyMember {
        /// Target project.
        project_id: ProjectId,
        /// Requesting student.
        student_id: UserId,
    },
    /// The acting user is not the project's recorded creator.
    #[error("user {user_id} is not the creator of project {project_id}")]
    NotProjectCreator {
        /// Target project.
        project_id: ProjectId,
        /// Acting user.
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
    MembershipStore(#[from] MembershipRepositoryError),
    /// Promoting the student into the project failed.
    #[error(transparent)]
    Membership(#[from] MembershipServiceError),
    /// Request repository operation failed.
    #[error(transparent)]
    Repository(#[from] CollaborationRequestRepositoryError),
}

impl CollaborationServiceError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::InvalidState,
            Self::InvalidAction(_) => ErrorKind::InvalidArgument,
            Self::ProjectNotFound(_) | Self::StudentNotFound(_) | Self::RequestNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::DuplicateRequest { .. } | Self::AlreadyMember { .. } => ErrorKind::Conflict,
            Self::NotProjectCreator { .. } => ErrorKind::Forbidden,
            Self::Projects(err) => err.kind(),
            Self::Users(_) => ErrorKind::Internal,
            Self::MembershipStore(err) => err.kind(),
            Self::Membership(err) => err.kind(),
            Self::Repository(err) => err.kind(),
        }
    }
}

/// Result type for collaboration workflow operations.
pub type CollaborationServiceResult<T> = Result<T, CollaborationServiceError>;

/// Collaboration request orchestration service.
#[derive(Clone)]
pub struct CollaborationService<S, C>
where
    S: ProjectRepository + UserDirectory + MembershipRepository + CollaborationRequestRepository,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    locks: Arc<ProjectLocks>,
    membership: MembershipService<S, C>,
}

impl<S, C> CollaborationService<S, C>
where
    S: ProjectRepository + UserDirectory + MembershipRepository + CollaborationRequestRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new collaboration workflow service.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>, locks: Arc<ProjectLocks>) -> Self {
        let membership =
            MembershipService::new(Arc::clone(&store), Arc::clone(&clock), Arc::clone(&locks));
        Self {
            store,
            clock,
            locks,
            membership,
        }
    }

    /// Files a new `PENDING` request from `student_id` to join a project.
    ///
    /// # Errors
    ///
    /// Returns [`CollaborationServiceError::ProjectNotFound`] or
    /// [`CollaborationServiceError::StudentNotFound`] for missing references,
    /// [`CollaborationServiceError::DuplicateRequest`] when any request for the
    /// pair already exists and [`CollaborationServiceError::AlreadyMember`]
    /// when the student already belongs to the project.
    pub async fn send_request(
        &self,
        project_id: ProjectId,
        student_id: UserId,
    ) -> CollaborationServiceResult<CollaborationRequest> {
        let lease = self.locks.acquire(project_id).await;
        self.send_request_locked(&lease, student_id).await
    }

    /// Approves or rejects a pending request on behalf of `acting_user_id`.
    ///
    /// Only the project's recorded creator may decide. Approval adds the
    /// student as `MEMBER` unless they already belong to the project.
    ///
    /// # Errors
    ///
    /// Returns [`CollaborationServiceError::RequestNotFound`] when the request
    /// is missing, [`CollaborationServiceError::NotProjectCreator`] when the
    /// acting user is not the creator,
    /// [`CollaborationServiceError::InvalidAction`] for an unknown action and
    /// [`CollaborationServiceError::Domain`] when the request was already
    /// decided.
    pub async fn respond_to_request(
        &self,
        request_id: RequestId,
        acting_user_id: UserId,
        action: &str,
    ) -> CollaborationServiceResult<CollaborationRequest> {
        let project_id = self.find_request(request_id).await?.project_id();
        let lease = self.locks.acquire(project_id).await;
        self.respond_locked(&lease, request_id, acting_user_id, action)
            .await
    }

    /// Lists the requests targeting a project. Only its creator may do so.
    ///
    /// # Errors
    ///
    /// Returns [`CollaborationServiceError::ProjectNotFound`] when the project
    /// is missing and [`CollaborationServiceError::NotProjectCreator`] when
    /// `owner_id` is not its creator.
    pub async fn list_by_project(
        &self,
        project_id: ProjectId,
        owner_id: UserId,
    ) -> CollaborationServiceResult<Vec<CollaborationRequestView>> {
        let project = self.require_project(project_id).await?;
        ensure_creator(&project, owner_id)?;

        let requests = self.store.list_requests_by_project(project_id).await?;
        let mut views = Vec::with_capacity(requests.len());
        for request in &requests {
            let student = self.store.find_user(request.student_id()).await?;
            views.push(CollaborationRequestView::new(
                request,
                Some(&project),
                student.as_ref(),
            ));
        }
        tracing::debug!(project_id = %project_id, count = views.len(), "listed project requests");
        Ok(views)
    }

    /// Lists the requests a student has sent.
    ///
    /// # Errors
    ///
    /// Returns [`CollaborationServiceError::StudentNotFound`] when the
    /// student is unknown.
    pub async fn list_by_student(
        &self,
        student_id: UserId,
    ) -> CollaborationServiceResult<Vec<CollaborationRequestView>> {
        let student = self
            .store
            .find_user(student_id)
            .await?
            .ok_or(CollaborationServiceError::StudentNotFound(student_id))?;

        let requests = self.store.list_requests_by_student(student_id).await?;
        let mut views = Vec::with_capacity(requests.len());
        for request in &requests {
            let project = self.store.find_project(request.project_id()).await?;
            views.push(CollaborationRequestView::new(
                request,
                project.as_ref(),
                Some(&student),
            ));
        }
        Ok(views)
    }

    /// Finds a request by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CollaborationServiceError::RequestNotFound`] when it does not
    /// exist.
    pub async fn find_request(
        &self,
        request_id: RequestId,
    ) -> CollaborationServiceResult<CollaborationRequest> {
        self.store
            .find_request(request_id)
            .await?
            .ok_or(CollaborationServiceError::RequestNotFound(request_id))
    }

    pub(crate) async fn send_request_locked(
        &self,
        lease: &ProjectLease,
        student_id: UserId,
    ) -> CollaborationServiceResult<CollaborationRequest> {
        let project_id = lease.project_id();
        self.require_project(project_id).await?;
        if self.store.find_user(student_id).await?.is_none() {
            return Err(CollaborationServiceError::StudentNotFound(student_id));
        }
        if self
            .store
            .find_request_for_pair(project_id, student_id)
            .await?
            .is_some()
        {
            return Err(CollaborationServiceError::DuplicateRequest {
                project_id,
                student_id,
            });
        }
        if self
            .store
            .find_member(project_id, student_id)
            .await?
            .is_some()
        {
            return Err(CollaborationServiceError::AlreadyMember {
                project_id,
                student_id,
            });
        }

        let request = CollaborationRequest::new(project_id, student_id, &*self.clock);
        self.store.store_request(&request).await?;
        tracing::info!(
            request_id = %request.id(),
            project_id = %project_id,
            student_id = %student_id,
            "collaboration request sent"
        );
        Ok(request)
    }

    pub(crate) async fn respond_locked(
        &self,
        lease: &ProjectLease,
        request_id: RequestId,
        acting_user_id: UserId,
        action: &str,
    ) -> CollaborationServiceResult<CollaborationRequest> {
        let mut request = self.find_request(request_id).await?;
        let project = self.require_project(lease.project_id()).await?;
        if let Err(err) = ensure_creator(&project, acting_user_id) {
            tracing::warn!(
                request_id = %request_id,
                project_id = %project.id(),
                user_id = %acting_user_id,
                "request decision denied"
            );
            return Err(err);
        }

        let decision = RequestAction::try_from(action)?;
        request.decide(decision, &*self.clock)?;

        let promoted = decision == RequestAction::Approve
            && self
                .store
                .find_member(project.id(), request.student_id())
                .await?
                .is_none();
        if promoted {
            self.membership
                .add_member_locked(lease, request.student_id(), ProjectRole::Member)
                .await?;
        }
        if let Err(err) = self.store.update_request(&request).await {
            if promoted {
                self.store
                    .delete_member(project.id(), request.student_id())
                    .await?;
            }
            return Err(err.into());
        }

        tracing::info!(
            request_id = %request_id,
            project_id = %project.id(),
            status = %request.status(),
            "collaboration request decided"
        );
        Ok(request)
    }

    async fn require_project(&self, project_id: ProjectId) -> CollaborationServiceResult<Project> {
        self.store
            .find_project(project_id)
            .await?
            .ok_or(CollaborationServiceError::ProjectNotFound(project_id))
    }
}

fn ensure_creator(project: &Project, user_id: UserId) -> CollaborationServiceResult<()> {
    if project.is_created_by(user_id) {
        return Ok(());
    }
    Err(CollaborationServiceError::NotProjectCreator {
        project_id: project.id(),
        user_id,
    })
}
