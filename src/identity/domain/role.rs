//! Platform-wide role of a user.

use super::ParseGlobalRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Global role granted by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlobalRole {
    /// A student who can create and join projects.
    Student,
    /// A professor, typically acting as mentor.
    Professor,
    /// A platform administrator.
    Admin,
}

impl GlobalRole {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Professor => "PROFESSOR",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for GlobalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for GlobalRole {
    type Error = ParseGlobalRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "STUDENT" => Ok(Self::Student),
            "PROFESSOR" => Ok(Self::Professor),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(ParseGlobalRoleError(value.to_owned())),
        }
    }
}
