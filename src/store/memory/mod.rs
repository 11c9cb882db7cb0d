//! Thread-safe in-memory store backing every port.
//!
//! One lock guards all tables so that cascading deletes and uniqueness
//! checks are atomic with the writes they protect.

mod comments;
mod members;
mod projects;
mod requests;
mod tasks;
mod users;

use crate::collaboration::domain::{CollaborationRequest, RequestId};
use crate::comment::domain::{CommentId, TaskComment};
use crate::error::poisoned;
use crate::identity::domain::{User, UserId};
use crate::membership::domain::ProjectMember;
use crate::project::domain::{Project, ProjectId};
use crate::task::domain::{Task, TaskId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory implementation of the user, project, membership, request, task
/// and comment ports.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCampusStore {
    state: Arc<RwLock<CampusState>>,
}

#[derive(Debug, Default)]
struct CampusState {
    users: HashMap<UserId, User>,
    projects: HashMap<ProjectId, Project>,
    members: HashMap<(ProjectId, UserId), ProjectMember>,
    requests: HashMap<RequestId, CollaborationRequest>,
    request_pairs: HashMap<(ProjectId, UserId), RequestId>,
    tasks: HashMap<TaskId, Task>,
    comments: HashMap<CommentId, TaskComment>,
}

impl CampusState {
    fn remove_task_cascade(&mut self, task_id: TaskId) -> Option<Task> {
        let removed = self.tasks.remove(&task_id)?;
        self.comments.retain(|_, comment| comment.task_id() != task_id);
        Some(removed)
    }

    fn remove_project_cascade(&mut self, project_id: ProjectId) -> Option<Project> {
        let removed = self.projects.remove(&project_id)?;
        self.members.retain(|(project, _), _| *project != project_id);
        self.requests
            .retain(|_, request| request.project_id() != project_id);
        self.request_pairs
            .retain(|(project, _), _| *project != project_id);

        let task_ids: Vec<TaskId> = self
            .tasks
            .values()
            .filter(|task| task.project_id() == project_id)
            .map(Task::id)
            .collect();
        for task_id in task_ids {
            self.remove_task_cascade(task_id);
        }
        Some(removed)
    }
}

impl InMemoryCampusStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds or replaces a user record.
    ///
    /// The core never writes users; this is how callers populate the
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the store lock is poisoned.
    pub fn insert_user(&self, user: User) -> std::io::Result<()> {
        let mut state = self.write()?;
        state.users.insert(user.id(), user);
        Ok(())
    }

    fn read(&self) -> std::io::Result<RwLockReadGuard<'_, CampusState>> {
        self.state.read().map_err(|err| poisoned(&err))
    }

    fn write(&self) -> std::io::Result<RwLockWriteGuard<'_, CampusState>> {
        self.state.write().map_err(|err| poisoned(&err))
    }
}
