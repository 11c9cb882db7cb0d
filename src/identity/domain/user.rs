//! User record as exposed by the directory.

use super::{GlobalRole, UserId};
use serde::{Deserialize, Serialize};

/// Read-only view of a platform user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    global_role: GlobalRole,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        global_role: GlobalRole,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            global_role,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the global role.
    #[must_use]
    pub const fn global_role(&self) -> GlobalRole {
        self.global_role
    }
}
