//! Error types for collaboration request transitions and parsing.

use super::{RequestId, RequestStatus};
use thiserror::Error;

/// Errors returned by collaboration request state changes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CollaborationDomainError {
    /// The request has already been decided.
    #[error("request {request_id} cannot move from {from} to {to}")]
    InvalidStateTransition {
        /// The request being decided.
        request_id: RequestId,
        /// Current status.
        from: RequestStatus,
        /// Requested status.
        to: RequestStatus,
    },
}

/// Error returned while parsing a request status label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown request status: {0}")]
pub struct ParseRequestStatusError(pub String);

/// Error returned for an action other than `approve` or `reject`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid action '{0}', use 'approve' or 'reject'")]
pub struct ParseRequestActionError(pub String);
