//! Domain model for the project catalogue.

mod error;
mod ids;
mod project;
mod status;

pub use error::{ParseProjectStatusError, ProjectDomainError};
pub use ids::{ProjectId, ProjectTitle};
pub use project::{Project, ProjectRevision};
pub use status::ProjectStatus;
