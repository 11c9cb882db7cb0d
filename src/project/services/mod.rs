//! Application services for the project catalogue.

mod catalogue;

pub use catalogue::{
    CreateProjectRequest, ProjectService, ProjectServiceError, ProjectServiceResult,
    UpdateProjectRequest,
};
