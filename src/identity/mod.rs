//! Identity context consumed by the collaboration core.
//!
//! The core never authenticates anyone. It receives a resolved
//! [`domain::CallerIdentity`] with every operation and reads user records
//! through the [`ports::UserDirectory`] port.

pub mod domain;
pub mod ports;
