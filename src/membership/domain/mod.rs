//! Domain model for project membership.

mod error;
mod member;
mod role;

pub use error::ParseProjectRoleError;
pub use member::ProjectMember;
pub use role::ProjectRole;
