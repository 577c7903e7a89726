//! ScoreDecisionMakerHandler - Copeland scores for one decision maker.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::analysis::{CopelandResult, CopelandScorer, CopelandScoresComputed};
use crate::domain::foundation::{
    AlternativeId, CommandMetadata, DecisionMakerId, EngineError, SerializableDomainEvent,
};
use crate::domain::judgment::PreferenceRelation;
use crate::ports::{
    AlternativeRepository, DecisionMakerRepository, EventPublisher, JudgmentRepository,
    ResultRepository,
};

/// Command to recompute a decision maker's Copeland scores.
#[derive(Debug, Clone)]
pub struct ScoreDecisionMakerCommand {
    pub decision_maker_id: DecisionMakerId,
}

/// Handler for Copeland scoring.
///
/// Replaces the decision maker's stored results with the new scores. With
/// strict completeness enabled an incomplete relation fails with
/// `IncompleteRelation` and nothing is stored.
pub struct ScoreDecisionMakerHandler {
    alternatives: Arc<dyn AlternativeRepository>,
    decision_makers: Arc<dyn DecisionMakerRepository>,
    judgments: Arc<dyn JudgmentRepository>,
    results: Arc<dyn ResultRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    strict_completeness: bool,
}

impl ScoreDecisionMakerHandler {
    pub fn new(
        alternatives: Arc<dyn AlternativeRepository>,
        decision_makers: Arc<dyn DecisionMakerRepository>,
        judgments: Arc<dyn JudgmentRepository>,
        results: Arc<dyn ResultRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            alternatives,
            decision_makers,
            judgments,
            results,
            event_publisher,
            strict_completeness: false,
        }
    }

    /// Rejects incomplete relations instead of scoring them with a warning.
    pub fn with_strict_completeness(mut self, strict: bool) -> Self {
        self.strict_completeness = strict;
        self
    }

    pub async fn handle(
        &self,
        cmd: ScoreDecisionMakerCommand,
        metadata: CommandMetadata,
    ) -> Result<CopelandResult, EngineError> {
        let (relation, alternatives) = load_relation(
            self.alternatives.as_ref(),
            self.decision_makers.as_ref(),
            self.judgments.as_ref(),
            cmd.decision_maker_id,
        )
        .await?;

        let result = CopelandScorer::score(&relation, &alternatives);
        if let Some(warning) = &result.warning {
            if self.strict_completeness {
                return Err(warning.clone().into_error());
            }
            warn!(
                decision_maker_id = %cmd.decision_maker_id,
                missing_pairs = warning.missing.len(),
                "Scoring an incomplete preference relation"
            );
        }

        self.results
            .replace_results(&cmd.decision_maker_id, &result.aggregated_results(&alternatives))
            .await?;
        info!(
            decision_maker_id = %cmd.decision_maker_id,
            winners = result.winners.len(),
            correlation_id = metadata.correlation_id(),
            "Copeland scores computed"
        );

        let envelope = CopelandScoresComputed::from_result(&result)
            .to_envelope()?
            .with_correlation_id(metadata.correlation_id());
        debug!(event_type = %envelope.event_type, "Publishing event");
        self.event_publisher.publish(envelope).await?;

        Ok(result)
    }
}

/// Loads every alternative plus the decision maker's relation over them.
pub(crate) async fn load_relation(
    alternatives: &dyn AlternativeRepository,
    decision_makers: &dyn DecisionMakerRepository,
    judgments: &dyn JudgmentRepository,
    decision_maker_id: DecisionMakerId,
) -> Result<(PreferenceRelation, Vec<AlternativeId>), EngineError> {
    if decision_makers.find_by_id(&decision_maker_id).await?.is_none() {
        return Err(EngineError::UnknownDecisionMaker(decision_maker_id));
    }
    let ids: Vec<AlternativeId> = alternatives.list().await?.iter().map(|a| a.id).collect();
    let stored = judgments.find_by_decision_maker(&decision_maker_id).await?;
    Ok((PreferenceRelation::from_judgments(decision_maker_id, &stored), ids))
}
