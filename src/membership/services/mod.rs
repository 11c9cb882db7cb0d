//! Application services for the membership store.

mod membership;

pub use membership::{MembershipService, MembershipServiceError, MembershipServiceResult};
