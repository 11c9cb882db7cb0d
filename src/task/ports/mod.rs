//! Port contracts for task lifecycle management.

mod repository;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
