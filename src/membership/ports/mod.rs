//! Port contracts for the membership store.

pub mod repository;

pub use repository::{
    MembershipRepository, MembershipRepositoryError, MembershipRepositoryResult,
};
