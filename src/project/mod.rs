//! Project catalogue.
//!
//! Projects are the unit that memberships, collaboration requests and tasks
//! hang off. Creating a project makes its creator the first `LEADER`;
//! deleting one cascades to everything the project owns. The module follows
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
