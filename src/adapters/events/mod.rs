//! Event bus adapters.
//!
//! - `InMemoryEventBus` - in-process bus that records published envelopes

mod in_memory;

pub use in_memory::InMemoryEventBus;
