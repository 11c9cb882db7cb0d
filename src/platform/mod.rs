//! Public operation surface.
//!
//! [`CollaborationPlatform`] takes a resolved [`CallerIdentity`] on every
//! call, applies the access rule for that operation and then delegates to the
//! owning context's service. Guards on mutating operations run inside the
//! project's critical section together with the mutation they protect.
//!
//! [`CallerIdentity`]: crate::identity::domain::CallerIdentity

mod error;
mod facade;

pub use error::{PlatformError, PlatformResult};
pub use facade::{CampusStore, CollaborationPlatform};

#[cfg(test)]
mod tests;
