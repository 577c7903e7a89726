//! Adapters - Implementations of port interfaces.
//!
//! - `events` - In-memory event bus
//! - `memory` - In-memory repositories

pub mod events;
pub mod memory;

pub use events::InMemoryEventBus;
pub use memory::InMemoryRepositories;
