//! Membership repository over the in-memory store.

use super::InMemoryCampusStore;
use crate::identity::domain::UserId;
use crate::membership::{
    domain::ProjectMember,
    ports::{MembershipRepository, MembershipRepositoryError, MembershipRepositoryResult},
};
use crate::project::domain::ProjectId;
use async_trait::async_trait;
use std::collections::hash_map::Entry;

#[async_trait]
impl MembershipRepository for InMemoryCampusStore {
    async fn store_member(&self, member: &ProjectMember) -> MembershipRepositoryResult<()> {
        let mut state = self
            .write()
            .map_err(MembershipRepositoryError::persistence)?;
        match state.members.entry((member.project_id(), member.user_id())) {
            Entry::Occupied(_) => Err(MembershipRepositoryError::DuplicateMember {
                project_id: member.project_id(),
                user_id: member.user_id(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(member.clone());
                Ok(())
            }
        }
    }

    async fn delete_member(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> MembershipRepositoryResult<()> {
        let mut state = self
            .write()
            .map_err(MembershipRepositoryError::persistence)?;
        state
            .members
            .remove(&(project_id, user_id))
            .map(|_| ())
            .ok_or(MembershipRepositoryError::NotFound {
                project_id,
                user_id,
            })
    }

    async fn find_member(
        &self,
        project_id: ProjectId,
        user_id: UserId,
    ) -> MembershipRepositoryResult<Option<ProjectMember>> {
        let state = self
            .read()
            .map_err(MembershipRepositoryError::persistence)?;
        Ok(state.members.get(&(project_id, user_id)).cloned())
    }

    async fn list_members(
        &self,
        project_id: ProjectId,
    ) -> MembershipRepositoryResult<Vec<ProjectMember>> {
        let state = self
            .read()
            .map_err(MembershipRepositoryError::persistence)?;
        Ok(state
            .members
            .values()
            .filter(|member| member.project_id() == project_id)
            .cloned()
            .collect())
    }

    async fn list_memberships_for_user(
        &self,
        user_id: UserId,
    ) -> MembershipRepositoryResult<Vec<ProjectMember>> {
        let state = self
            .read()
            .map_err(MembershipRepositoryError::persistence)?;
        Ok(state
            .members
            .values()
            .filter(|member| member.user_id() == user_id)
            .cloned()
            .collect())
    }
}
