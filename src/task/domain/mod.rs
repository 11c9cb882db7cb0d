//! Domain model for task lifecycle management.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError};
pub use ids::TaskId;
pub use status::{TaskPriority, TaskStatus};
pub use task::{Task, TaskDraft};
