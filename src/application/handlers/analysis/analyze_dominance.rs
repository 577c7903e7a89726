//! AnalyzeDominanceHandler - non-dominated set for one decision maker.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::analysis::{DominanceAnalyzed, DominanceAnalyzer, DominanceResult};
use crate::domain::foundation::{CommandMetadata, DecisionMakerId, EngineError, SerializableDomainEvent};
use crate::ports::{AlternativeRepository, DecisionMakerRepository, EventPublisher, JudgmentRepository};

use super::score_decision_maker::load_relation;

/// Command to analyze a decision maker's preference graph.
#[derive(Debug, Clone)]
pub struct AnalyzeDominanceCommand {
    pub decision_maker_id: DecisionMakerId,
}

/// Handler for dominance analysis. Stores nothing.
pub struct AnalyzeDominanceHandler {
    alternatives: Arc<dyn AlternativeRepository>,
    decision_makers: Arc<dyn DecisionMakerRepository>,
    judgments: Arc<dyn JudgmentRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl AnalyzeDominanceHandler {
    pub fn new(
        alternatives: Arc<dyn AlternativeRepository>,
        decision_makers: Arc<dyn DecisionMakerRepository>,
        judgments: Arc<dyn JudgmentRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            alternatives,
            decision_makers,
            judgments,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeDominanceCommand,
        metadata: CommandMetadata,
    ) -> Result<DominanceResult, EngineError> {
        let (relation, alternatives) = load_relation(
            self.alternatives.as_ref(),
            self.decision_makers.as_ref(),
            self.judgments.as_ref(),
            cmd.decision_maker_id,
        )
        .await?;

        let result = DominanceAnalyzer::analyze(&relation, &alternatives);
        info!(
            decision_maker_id = %cmd.decision_maker_id,
            non_dominated = result.non_dominated.len(),
            correlation_id = metadata.correlation_id(),
            "Dominance analyzed"
        );

        let envelope = DominanceAnalyzed::from_result(&result)
            .to_envelope()?
            .with_correlation_id(metadata.correlation_id());
        debug!(event_type = %envelope.event_type, "Publishing event");
        self.event_publisher.publish(envelope).await?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestContext;
    use crate::domain::alternatives::Alternative;
    use crate::domain::foundation::AlternativeId;
    use crate::domain::judgment::{JudgmentPair, Outcome};
    use crate::domain::panel::DecisionMaker;

    #[tokio::test]
    async fn cyclic_preferences_leave_nothing_non_dominated() {
        let ctx = TestContext::new();
        let dm = DecisionMaker::new("Alice").unwrap();
        ctx.repos.decision_maker_repository().save(&dm).await.unwrap();
        let mut ids: Vec<AlternativeId> = Vec::new();
        for name in ["A", "B", "C"] {
            let alt = Alternative::new(name).unwrap();
            ctx.repos.alternative_repository().save(&alt).await.unwrap();
            ids.push(alt.id);
        }
        for (a, b) in [(0, 1), (1, 2), (2, 0)] {
            let pair = JudgmentPair::new(dm.id, ids[a], ids[b], Outcome::Greater).unwrap();
            ctx.repos.judgment_repository().record(&pair).await.unwrap();
        }

        let handler = AnalyzeDominanceHandler::new(
            ctx.repos.alternative_repository(),
            ctx.repos.decision_maker_repository(),
            ctx.repos.judgment_repository(),
            ctx.publisher(),
        );
        let result = handler
            .handle(AnalyzeDominanceCommand { decision_maker_id: dm.id }, CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert!(result.non_dominated.is_empty());
        assert!(result.warning.is_none());
        assert!(ctx.bus.has_event("analysis.dominance_analyzed.v1"));
        assert!(ctx.repos.result_repository().list().await.unwrap().is_empty());
    }
}
