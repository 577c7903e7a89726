//! RankCriteriaHandler - overwrites criterion weights.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CommandMetadata, CriterionId, EngineError};
use crate::ports::CriterionRepository;

/// Command carrying the new weight of each listed criterion.
#[derive(Debug, Clone)]
pub struct RankCriteriaCommand {
    pub weights: HashMap<CriterionId, i32>,
}

/// Handler for re-weighting criteria.
///
/// Every listed criterion must exist; nothing is written otherwise. Returns
/// the sum of all criterion weights after the update.
pub struct RankCriteriaHandler {
    criteria: Arc<dyn CriterionRepository>,
}

impl RankCriteriaHandler {
    pub fn new(criteria: Arc<dyn CriterionRepository>) -> Self {
        Self { criteria }
    }

    pub async fn handle(&self, cmd: RankCriteriaCommand, metadata: CommandMetadata) -> Result<i64, EngineError> {
        let mut criteria = self.criteria.list().await?;

        if let Some(unknown) = cmd
            .weights
            .keys()
            .find(|id| !criteria.iter().any(|c| &c.id == *id))
        {
            return Err(EngineError::UnknownCriterion(*unknown));
        }

        for criterion in criteria.iter_mut() {
            if let Some(weight) = cmd.weights.get(&criterion.id) {
                criterion.weight = *weight;
                self.criteria.save(criterion).await?;
            }
        }

        let total: i64 = criteria.iter().map(|c| i64::from(c.weight)).sum();
        info!(
            criteria = criteria.len(),
            total_weight = total,
            correlation_id = metadata.correlation_id(),
            "Criteria re-weighted"
        );
        Ok(total)
    }
}
