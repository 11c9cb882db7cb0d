//! Task status and priority labels.

use super::{ParseTaskPriorityError, ParseTaskStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress label of a task.
///
/// Not a state machine: any value may be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Not started.
    Todo,
    /// Being worked on.
    InProgress,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }

    /// Parses an optional label, treating absent or blank input as `TODO`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskStatusError`] for a non-blank unknown label.
    pub fn parse_or_default(label: Option<&str>) -> Result<Self, ParseTaskStatusError> {
        match label {
            Some(value) if !value.trim().is_empty() => Self::try_from(value),
            _ => Ok(Self::Todo),
        }
    }

    /// Case-insensitive comparison with a raw filter label.
    #[must_use]
    pub fn matches_label(self, label: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(label)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Urgency of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Default urgency.
    Medium,
    /// Urgent.
    High,
}

impl TaskPriority {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// Parses an optional label, treating absent or blank input as `MEDIUM`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskPriorityError`] for a non-blank unknown label.
    pub fn parse_or_default(label: Option<&str>) -> Result<Self, ParseTaskPriorityError> {
        match label {
            Some(value) if !value.trim().is_empty() => Self::try_from(value),
            _ => Ok(Self::Medium),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}
