//! User directory over the in-memory store.

use super::InMemoryCampusStore;
use crate::identity::{
    domain::{User, UserId},
    ports::{UserDirectory, UserDirectoryError, UserDirectoryResult},
};
use async_trait::async_trait;

#[async_trait]
impl UserDirectory for InMemoryCampusStore {
    async fn find_user(&self, id: UserId) -> UserDirectoryResult<Option<User>> {
        let state = self.read().map_err(UserDirectoryError::persistence)?;
        Ok(state.users.get(&id).cloned())
    }
}
