//! Project progress status.

use super::ParseProjectStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress status of a project. Evolves independently of membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    /// Recruiting team members.
    Open,
    /// Work is under way.
    Ongoing,
    /// The project is finished.
    Completed,
}

impl ProjectStatus {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Ongoing => "ONGOING",
            Self::Completed => "COMPLETED",
        }
    }

    /// Parses an optional label, treating absent or blank input as `OPEN`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseProjectStatusError`] for a non-blank unknown label.
    pub fn parse_or_open(label: Option<&str>) -> Result<Self, ParseProjectStatusError> {
        match label {
            Some(value) if !value.trim().is_empty() => Self::try_from(value),
            _ => Ok(Self::Open),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "OPEN" => Ok(Self::Open),
            "ONGOING" => Ok(Self::Ongoing),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}
