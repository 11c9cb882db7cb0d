//! Port contracts for task comments.

mod repository;

pub use repository::{
    TaskCommentRepository, TaskCommentRepositoryError, TaskCommentRepositoryResult,
};
