//! Application services for the collaboration request workflow.

mod workflow;

pub use workflow::{
    CollaborationService, CollaborationServiceError, CollaborationServiceResult,
};
