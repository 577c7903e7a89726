//! Analysis domain events.
//!
//! Published after a decision maker's relation has been scored. Payloads
//! carry summarized results so subscribers do not need to re-read the
//! judgment tables.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{CopelandResult, DominanceResult};
use crate::domain::foundation::{domain_event, AlternativeId, DecisionMakerId, EventId, Timestamp};

/// Published when Copeland scores are recomputed for a decision maker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopelandScoresComputed {
    /// Unique event identifier for deduplication.
    pub event_id: EventId,
    pub decision_maker_id: DecisionMakerId,
    /// Map of alternative -> number of wins and ties.
    pub scores: HashMap<AlternativeId, u32>,
    pub winners: Vec<AlternativeId>,
    /// Number of unordered pairs without a judgment.
    pub missing_pairs: usize,
    pub computed_at: Timestamp,
}

impl CopelandScoresComputed {
    pub fn from_result(result: &CopelandResult) -> Self {
        Self {
            event_id: EventId::new(),
            decision_maker_id: result.decision_maker_id,
            scores: result.scores.clone(),
            winners: result.winners.clone(),
            missing_pairs: result.warning.as_ref().map(|w| w.missing.len()).unwrap_or(0),
            computed_at: Timestamp::now(),
        }
    }
}

domain_event!(
    CopelandScoresComputed,
    event_type = "analysis.copeland_scores_computed.v1",
    schema_version = 1,
    aggregate_id = decision_maker_id,
    aggregate_type = "DecisionMaker",
    occurred_at = computed_at,
    event_id = event_id
);

/// Published when the non-dominated set is recomputed for a decision maker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DominanceAnalyzed {
    pub event_id: EventId,
    pub decision_maker_id: DecisionMakerId,
    pub non_dominated: Vec<AlternativeId>,
    /// Number of strict edges in the preference graph.
    pub strict_edges: usize,
    pub missing_pairs: usize,
    pub analyzed_at: Timestamp,
}

impl DominanceAnalyzed {
    pub fn from_result(result: &DominanceResult) -> Self {
        Self {
            event_id: EventId::new(),
            decision_maker_id: result.decision_maker_id,
            non_dominated: result.non_dominated.clone(),
            strict_edges: result.matrix.edges.iter().filter(|e| !e.mutual).count(),
            missing_pairs: result.warning.as_ref().map(|w| w.missing.len()).unwrap_or(0),
            analyzed_at: Timestamp::now(),
        }
    }
}

domain_event!(
    DominanceAnalyzed,
    event_type = "analysis.dominance_analyzed.v1",
    schema_version = 1,
    aggregate_id = decision_maker_id,
    aggregate_type = "DecisionMaker",
    occurred_at = analyzed_at,
    event_id = event_id
);
