//! RemoveDecisionMakerHandler - drops a panel member and everything keyed by it.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CommandMetadata, DecisionMakerId, EngineError};
use crate::ports::{
    DecisionMakerRepository, JudgmentRepository, PeerComparisonRepository, ResultRepository,
};

/// Command to remove a decision maker.
#[derive(Debug, Clone)]
pub struct RemoveDecisionMakerCommand {
    pub decision_maker_id: DecisionMakerId,
}

/// Handler for removing decision makers.
///
/// Cascades to judgments, peer comparisons in both directions and stored
/// results. Priorities of the remaining members are left untouched until
/// the next aggregation.
pub struct RemoveDecisionMakerHandler {
    decision_makers: Arc<dyn DecisionMakerRepository>,
    peer_comparisons: Arc<dyn PeerComparisonRepository>,
    judgments: Arc<dyn JudgmentRepository>,
    results: Arc<dyn ResultRepository>,
}

impl RemoveDecisionMakerHandler {
    pub fn new(
        decision_makers: Arc<dyn DecisionMakerRepository>,
        peer_comparisons: Arc<dyn PeerComparisonRepository>,
        judgments: Arc<dyn JudgmentRepository>,
        results: Arc<dyn ResultRepository>,
    ) -> Self {
        Self {
            decision_makers,
            peer_comparisons,
            judgments,
            results,
        }
    }

    pub async fn handle(
        &self,
        cmd: RemoveDecisionMakerCommand,
        metadata: CommandMetadata,
    ) -> Result<(), EngineError> {
        let id = cmd.decision_maker_id;
        if self.decision_makers.find_by_id(&id).await?.is_none() {
            return Err(EngineError::UnknownDecisionMaker(id));
        }

        self.judgments.delete_by_decision_maker(&id).await?;
        self.peer_comparisons.delete_by_decision_maker(&id).await?;
        self.results.delete_by_decision_maker(&id).await?;
        self.decision_makers.delete(&id).await?;

        info!(
            decision_maker_id = %id,
            correlation_id = metadata.correlation_id(),
            "Decision maker removed"
        );
        Ok(())
    }
}
