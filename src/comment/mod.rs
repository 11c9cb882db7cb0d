//! Append-only comment log attached to tasks.
//!
//! Comments are never edited or deleted individually; they disappear only
//! when their task (or its project) is deleted.

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
