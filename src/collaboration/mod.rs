//! Collaboration request workflow.
//!
//! A student asks to join a project; the project's creator approves or
//! rejects the request. Approval promotes the student into the membership
//! store as `MEMBER`. Decided requests are terminal. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
