//! Panel module - decision makers, their peer comparisons, and priorities.

mod decision_maker;
mod events;
mod peer_comparison;
mod priority_aggregator;

pub use decision_maker::DecisionMaker;
pub use events::{PrioritiesAggregated, PANEL_AGGREGATE_ID};
pub use peer_comparison::{ComparisonMatrix, PeerComparison};
pub use priority_aggregator::{DecisionMakerPriority, PriorityAggregator, PROPAGATION_STEPS};
