//! Error types for identity parsing.

use thiserror::Error;

/// Error returned while parsing a global role label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown global role: {0}")]
pub struct ParseGlobalRoleError(pub String);
