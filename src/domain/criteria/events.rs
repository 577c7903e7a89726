//! Criteria domain events.

use serde::{Deserialize, Serialize};

use super::NormalizedMark;
use crate::domain::foundation::{domain_event, CriterionId, EventId, Timestamp};

/// Published after every mark of a criterion has been renormalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionNormalized {
    pub event_id: EventId,
    pub criterion_id: CriterionId,
    pub marks: Vec<NormalizedMark>,
    pub normalized_at: Timestamp,
}

impl CriterionNormalized {
    pub fn new(criterion_id: CriterionId, marks: Vec<NormalizedMark>) -> Self {
        Self {
            event_id: EventId::new(),
            criterion_id,
            marks,
            normalized_at: Timestamp::now(),
        }
    }
}

domain_event!(
    CriterionNormalized,
    event_type = "criterion.normalized.v1",
    schema_version = 1,
    aggregate_id = criterion_id,
    aggregate_type = "Criterion",
    occurred_at = normalized_at,
    event_id = event_id
);
