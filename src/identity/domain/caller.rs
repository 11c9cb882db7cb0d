//! Resolved identity of the caller of an operation.

use super::{GlobalRole, UserId};
use serde::{Deserialize, Serialize};

/// The authenticated caller, as supplied by the identity provider.
///
/// `user_id` is authoritative; the core never re-authenticates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    user_id: UserId,
    email: String,
    global_role: GlobalRole,
}

impl CallerIdentity {
    /// Creates a caller identity.
    #[must_use]
    pub fn new(user_id: UserId, email: impl Into<String>, global_role: GlobalRole) -> Self {
        Self {
            user_id,
            email: email.into(),
            global_role,
        }
    }

    /// Shorthand for a caller with the `STUDENT` role.
    #[must_use]
    pub fn student(user_id: UserId, email: impl Into<String>) -> Self {
        Self::new(user_id, email, GlobalRole::Student)
    }

    /// Returns the caller's user identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the caller's email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the caller's global role.
    #[must_use]
    pub const fn global_role(&self) -> GlobalRole {
        self.global_role
    }

    /// Returns `true` when the caller holds the `ADMIN` role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.global_role, GlobalRole::Admin)
    }
}
