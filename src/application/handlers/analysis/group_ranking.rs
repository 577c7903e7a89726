//! GroupRankingHandler - combines stored priorities and Copeland results.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::domain::analysis::{GroupRanking, RankedAlternative};
use crate::domain::foundation::{AlternativeId, DecisionMakerId, EngineError};
use crate::ports::{AlternativeRepository, DecisionMakerRepository, ResultRepository};

/// Handler for the group ranking query.
///
/// Reads cached priorities and results; run scoring and priority
/// aggregation first for current values.
pub struct GroupRankingHandler {
    alternatives: Arc<dyn AlternativeRepository>,
    decision_makers: Arc<dyn DecisionMakerRepository>,
    results: Arc<dyn ResultRepository>,
}

impl GroupRankingHandler {
    pub fn new(
        alternatives: Arc<dyn AlternativeRepository>,
        decision_makers: Arc<dyn DecisionMakerRepository>,
        results: Arc<dyn ResultRepository>,
    ) -> Self {
        Self {
            alternatives,
            decision_makers,
            results,
        }
    }

    pub async fn handle(&self) -> Result<Vec<RankedAlternative>, EngineError> {
        let alternatives: Vec<AlternativeId> =
            self.alternatives.list().await?.iter().map(|a| a.id).collect();
        let priorities: HashMap<DecisionMakerId, i64> = self
            .decision_makers
            .list()
            .await?
            .iter()
            .filter_map(|dm| dm.priority.map(|p| (dm.id, p)))
            .collect();
        let results = self.results.list().await?;

        let ranking = GroupRanking::combine(&alternatives, &priorities, &results)?;
        info!(alternatives = ranking.len(), "Group ranking computed");
        Ok(ranking)
    }
}
