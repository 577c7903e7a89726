//! Panel command handlers.

mod aggregate_priorities;
mod record_peer_comparison;
mod register_decision_maker;
mod remove_decision_maker;

pub use aggregate_priorities::AggregatePrioritiesHandler;
pub use record_peer_comparison::{RecordPeerComparisonCommand, RecordPeerComparisonHandler};
pub use register_decision_maker::{RegisterDecisionMakerCommand, RegisterDecisionMakerHandler};
pub use remove_decision_maker::{RemoveDecisionMakerCommand, RemoveDecisionMakerHandler};
