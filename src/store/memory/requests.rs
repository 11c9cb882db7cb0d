//! Collaboration request repository over the in-memory store.

use super::InMemoryCampusStore;
use crate::collaboration::{
    domain::{CollaborationRequest, RequestId},
    ports::{
        CollaborationRequestRepository, CollaborationRequestRepositoryError,
        CollaborationRequestRepositoryResult,
    },
};
use crate::identity::domain::UserId;
use crate::project::domain::ProjectId;
use async_trait::async_trait;

#[async_trait]
impl CollaborationRequestRepository for InMemoryCampusStore {
    async fn store_request(
        &self,
        request: &CollaborationRequest,
    ) -> CollaborationRequestRepositoryResult<()> {
        let mut state = self
            .write()
            .map_err(CollaborationRequestRepositoryError::persistence)?;
        let pair = (request.project_id(), request.student_id());
        if state.request_pairs.contains_key(&pair) || state.requests.contains_key(&request.id()) {
            return Err(CollaborationRequestRepositoryError::DuplicateRequest {
                project_id: request.project_id(),
                student_id: request.student_id(),
            });
        }
        state.request_pairs.insert(pair, request.id());
        state.requests.insert(request.id(), request.clone());
        Ok(())
    }

    async fn update_request(
        &self,
        request: &CollaborationRequest,
    ) -> CollaborationRequestRepositoryResult<()> {
        let mut state = self
            .write()
            .map_err(CollaborationRequestRepositoryError::persistence)?;
        let slot = state
            .requests
            .get_mut(&request.id())
            .ok_or(CollaborationRequestRepositoryError::NotFound(request.id()))?;
        *slot = request.clone();
        Ok(())
    }

    async fn find_request(
        &self,
        id: RequestId,
    ) -> CollaborationRequestRepositoryResult<Option<CollaborationRequest>> {
        let state = self
            .read()
            .map_err(CollaborationRequestRepositoryError::persistence)?;
        Ok(state.requests.get(&id).cloned())
    }

    async fn find_request_for_pair(
        &self,
        project_id: ProjectId,
        student_id: UserId,
    ) -> CollaborationRequestRepositoryResult<Option<CollaborationRequest>> {
        let state = self
            .read()
            .map_err(CollaborationRequestRepositoryError::persistence)?;
        Ok(state
            .request_pairs
            .get(&(project_id, student_id))
            .and_then(|id| state.requests.get(id))
            .cloned())
    }

    async fn list_requests_by_project(
        &self,
        project_id: ProjectId,
    ) -> CollaborationRequestRepositoryResult<Vec<CollaborationRequest>> {
        let state = self
            .read()
            .map_err(CollaborationRequestRepositoryError::persistence)?;
        Ok(state
            .requests
            .values()
            .filter(|request| request.project_id() == project_id)
            .cloned()
            .collect())
    }

    async fn list_requests_by_student(
        &self,
        student_id: UserId,
    ) -> CollaborationRequestRepositoryResult<Vec<CollaborationRequest>> {
        let state = self
            .read()
            .map_err(CollaborationRequestRepositoryError::persistence)?;
        Ok(state
            .requests
            .values()
            .filter(|request| request.student_id() == student_id)
            .cloned()
            .collect())
    }
}
