//! Judgment domain events.

use serde::{Deserialize, Serialize};

use super::{JudgmentPair, Outcome};
use crate::domain::foundation::{domain_event, AlternativeId, DecisionMakerId, EventId, Timestamp};

/// Published when a judgment and its inverse have been stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgmentRecorded {
    pub event_id: EventId,
    pub decision_maker_id: DecisionMakerId,
    pub first: AlternativeId,
    pub second: AlternativeId,
    pub outcome: Outcome,
    pub recorded_at: Timestamp,
}

impl JudgmentRecorded {
    pub fn from_pair(pair: &JudgmentPair) -> Self {
        let forward = pair.forward();
        Self {
            event_id: EventId::new(),
            decision_maker_id: forward.decision_maker_id,
            first: forward.first,
            second: forward.second,
            outcome: forward.outcome,
            recorded_at: Timestamp::now(),
        }
    }
}

domain_event!(
    JudgmentRecorded,
    event_type = "judgment.recorded.v1",
    schema_version = 1,
    aggregate_id = decision_maker_id,
    aggregate_type = "DecisionMaker",
    occurred_at = recorded_at,
    event_id = event_id
);
