//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write through the repositories and publish events;
//! query handlers only read.

pub mod handlers;

pub use handlers::*;
