//! Project repository over the in-memory store.

use super::InMemoryCampusStore;
use crate::project::{
    domain::{Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use async_trait::async_trait;

#[async_trait]
impl ProjectRepository for InMemoryCampusStore {
    async fn store_project(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.write().map_err(ProjectRepositoryError::persistence)?;
        if state.projects.contains_key(&project.id()) {
            return Err(ProjectRepositoryError::DuplicateProject(project.id()));
        }
        state.projects.insert(project.id(), project.clone());
        Ok(())
    }

    async fn update_project(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.write().map_err(ProjectRepositoryError::persistence)?;
        let slot = state
            .projects
            .get_mut(&project.id())
            .ok_or(ProjectRepositoryError::NotFound(project.id()))?;
        *slot = project.clone();
        Ok(())
    }

    async fn find_project(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.read().map_err(ProjectRepositoryError::persistence)?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn list_projects(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.read().map_err(ProjectRepositoryError::persistence)?;
        Ok(state.projects.values().cloned().collect())
    }

    async fn delete_project(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        let mut state = self.write().map_err(ProjectRepositoryError::persistence)?;
        state
            .remove_project_cascade(id)
            .map(|_| ())
            .ok_or(ProjectRepositoryError::NotFound(id))
    }
}
