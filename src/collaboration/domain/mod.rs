//! Domain model for collaboration requests.

mod error;
mod ids;
mod request;
mod status;
mod view;

pub use error::{CollaborationDomainError, ParseRequestActionError, ParseRequestStatusError};
pub use ids::RequestId;
pub use request::CollaborationRequest;
pub use status::{RequestAction, RequestStatus};
pub use view::CollaborationRequestView;
