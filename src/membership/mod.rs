//! Membership store.
//!
//! Holds, per project, the set of members and each member's project-scoped
//! role. The authorization evaluator reads it on every guarded operation;
//! approving a collaboration request is the only other component that writes
//! to it. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
