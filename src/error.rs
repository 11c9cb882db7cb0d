//! Error classification shared by every service in the crate.
//!
//! Each bounded context defines its own `thiserror` enums. They all map onto
//! [`ErrorKind`] so that an outer transport layer can translate failures
//! without matching on context-specific variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// A referenced project, user, task or request does not exist.
    NotFound,
    /// The operation would duplicate a unique record.
    Conflict,
    /// The caller failed an ownership or membership check.
    Forbidden,
    /// An enum label or other argument was not recognised.
    InvalidArgument,
    /// The target is in a state the operation cannot leave.
    InvalidState,
    /// Storage failed for reasons unrelated to the request.
    Internal,
}

impl ErrorKind {
    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::Forbidden => "FORBIDDEN",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::InvalidState => "INVALID_STATE",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wraps a poisoned-lock message as a boxed persistence error source.
pub(crate) fn poisoned(err: &impl fmt::Display) -> std::io::Error {
    std::io::Error::other(err.to_string())
}
