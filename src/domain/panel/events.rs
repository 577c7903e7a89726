//! Panel domain events.

use serde::{Deserialize, Serialize};

use super::DecisionMakerPriority;
use crate::domain::foundation::{domain_event, EventId, Timestamp};

/// Aggregate id used for events that concern the whole panel.
pub const PANEL_AGGREGATE_ID: &str = "panel";

/// Published after decision-maker priorities have been recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritiesAggregated {
    pub event_id: EventId,
    pub panel: String,
    pub priorities: Vec<DecisionMakerPriority>,
    pub aggregated_at: Timestamp,
}

impl PrioritiesAggregated {
    pub fn new(priorities: Vec<DecisionMakerPriority>) -> Self {
        Self {
            event_id: EventId::new(),
            panel: PANEL_AGGREGATE_ID.to_string(),
            priorities,
            aggregated_at: Timestamp::now(),
        }
    }
}

domain_event!(
    PrioritiesAggregated,
    event_type = "panel.priorities_aggregated.v1",
    schema_version = 1,
    aggregate_id = panel,
    aggregate_type = "Panel",
    occurred_at = aggregated_at,
    event_id = event_id
);
