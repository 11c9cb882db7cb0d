//! Campus collaboration: project membership and role-based workflows.
//!
//! This crate provides the core of a campus project-collaboration platform.
//! Students ask to join projects, project creators decide those requests,
//! and members manage tasks and leave comments on them. Every operation
//! takes an explicit caller identity and is checked against project-scoped
//! roles before it touches storage.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Services**: Orchestration over the ports
//!
//! # Modules
//!
//! - [`identity`]: Users, global roles and the resolved caller identity
//! - [`project`]: Project catalogue and cascading deletion
//! - [`membership`]: Project members and their project-scoped roles
//! - [`collaboration`]: Join requests and their approval workflow
//! - [`authorization`]: Membership, ownership and task-modification checks
//! - [`task`]: Task creation, assignment and status tracking
//! - [`comment`]: Append-only comments on tasks
//! - [`platform`]: Caller-aware public operation surface
//! - [`store`]: In-memory storage adapter

pub mod authorization;
pub mod collaboration;
pub mod comment;
pub mod config;
pub mod error;
pub mod identity;
pub mod locking;
pub mod membership;
pub mod platform;
pub mod project;
pub mod store;
pub mod task;
pub mod telemetry;

#[cfg(test)]
mod test_support;
