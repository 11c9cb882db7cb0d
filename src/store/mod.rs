//! Storage adapters implementing the data access ports.

pub mod memory;

pub use memory::InMemoryCampusStore;
