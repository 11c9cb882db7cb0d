//! Domain model for task comments.

mod comment;
mod ids;

pub use comment::TaskComment;
pub use ids::CommentId;
