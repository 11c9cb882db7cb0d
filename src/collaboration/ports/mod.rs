//! Port contracts for the collaboration request workflow.

pub mod repository;

pub use repository::{
    CollaborationRequestRepository, CollaborationRequestRepositoryError,
    CollaborationRequestRepositoryResult,
};
