//! Identity domain values.

mod caller;
mod error;
mod ids;
mod role;
mod user;

pub use caller::CallerIdentity;
pub use error::ParseGlobalRoleError;
pub use ids::UserId;
pub use role::GlobalRole;
pub use user::User;
