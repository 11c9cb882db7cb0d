//! Task lifecycle management.
//!
//! Tasks belong to a project and are created, assigned, moved between
//! statuses and deleted by project members. Status is a free label rather
//! than a guarded state machine: any status may follow any other, and only
//! the first move into `DONE` stamps the completion time. The module follows
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
