//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, events and error types
//! that form the vocabulary of the decision engine.

mod command;
mod engine_error;
mod errors;
mod events;
mod ids;
mod percentage;
mod timestamp;

pub use command::CommandMetadata;
pub use engine_error::EngineError;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{AlternativeId, CriterionId, DecisionMakerId, MarkId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
