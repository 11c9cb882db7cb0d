//! Application services for task comments.

mod log;

pub use log::{TaskCommentError, TaskCommentResult, TaskCommentService};
