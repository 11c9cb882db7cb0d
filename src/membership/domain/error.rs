//! Error types for membership parsing.

use thiserror::Error;

/// Error returned while parsing a project role label strictly.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project role: {0}")]
pub struct ParseProjectRoleError(pub String);
