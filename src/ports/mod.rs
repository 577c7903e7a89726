//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and storage or transport. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `CriterionRepository`, `MarkRepository` - criteria and their marks
//! - `AlternativeRepository`, `ProfileRepository` - alternatives and profiles
//! - `JudgmentRepository` - pairwise judgments, written a pair at a time
//! - `DecisionMakerRepository`, `PeerComparisonRepository` - the panel
//! - `ResultRepository` - cached Copeland scores
//!
//! Every derived set (normalized marks, results, priorities) is written
//! with one repository call so adapters can make the write atomic.
//!
//! ## Event Ports
//!
//! - `EventPublisher` - Port for publishing domain events

mod alternative_repository;
mod criterion_repository;
mod decision_maker_repository;
mod event_publisher;
mod judgment_repository;
mod result_repository;

pub use alternative_repository::{AlternativeRepository, ProfileRepository};
pub use criterion_repository::{CriterionRepository, MarkRepository};
pub use decision_maker_repository::{DecisionMakerRepository, PeerComparisonRepository};
pub use event_publisher::EventPublisher;
pub use judgment_repository::JudgmentRepository;
pub use result_repository::ResultRepository;
