//! Project-scoped member roles.

use super::ParseProjectRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a member holds within one project.
///
/// This is a plain tag. Nothing guarantees a project keeps exactly one
/// `Leader`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectRole {
    /// Leads the project. The creator starts as leader.
    Leader,
    /// Regular team member.
    Member,
    /// Mentor, usually a professor.
    Mentor,
}

impl ProjectRole {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Leader => "LEADER",
            Self::Member => "MEMBER",
            Self::Mentor => "MENTOR",
        }
    }

    /// Returns `true` for the roles that count as project owner.
    #[must_use]
    pub const fn is_owner_role(self) -> bool {
        matches!(self, Self::Leader | Self::Mentor)
    }

    /// Resolves a requested role, normalising absent or unknown labels to
    /// [`ProjectRole::Member`].
    #[must_use]
    pub fn from_label_or_member(label: Option<&str>) -> Self {
        label
            .and_then(|value| Self::try_from(value).ok())
            .unwrap_or(Self::Member)
    }
}

impl fmt::Display for ProjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProjectRole {
    type Error = ParseProjectRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "LEADER" => Ok(Self::Leader),
            "MEMBER" => Ok(Self::Member),
            "MENTOR" => Ok(Self::Mentor),
            _ => Err(ParseProjectRoleError(value.to_owned())),
        }
    }
}
