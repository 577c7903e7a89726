//! RecordJudgmentHandler - stores one pairwise judgment and its inverse.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{
    AlternativeId, CommandMetadata, DecisionMakerId, EngineError, SerializableDomainEvent,
};
use crate::domain::judgment::{JudgmentPair, JudgmentRecorded, Outcome};
use crate::ports::{AlternativeRepository, DecisionMakerRepository, EventPublisher, JudgmentRepository};

/// Command to record "first <outcome> second" for a decision maker.
#[derive(Debug, Clone)]
pub struct RecordJudgmentCommand {
    pub decision_maker_id: DecisionMakerId,
    pub first: AlternativeId,
    pub second: AlternativeId,
    pub outcome: Outcome,
}

/// Handler for recording judgments.
///
/// The judgment and its inverse reach the repository in one `record` call.
pub struct RecordJudgmentHandler {
    alternatives: Arc<dyn AlternativeRepository>,
    decision_makers: Arc<dyn DecisionMakerRepository>,
    judgments: Arc<dyn JudgmentRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RecordJudgmentHandler {
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
        cmd: RecordJudgmentCommand,
        metadata: CommandMetadata,
    ) -> Result<JudgmentPair, EngineError> {
        if self.decision_makers.find_by_id(&cmd.decision_maker_id).await?.is_none() {
            return Err(unknown_decision_maker(cmd.decision_maker_id));
        }
        let known: Vec<AlternativeId> = self.alternatives.list().await?.iter().map(|a| a.id).collect();
        let pair = build_pair(&known, cmd.decision_maker_id, cmd.first, cmd.second, cmd.outcome)?;

        self.judgments.record(&pair).await?;
        info!(
            decision_maker_id = %cmd.decision_maker_id,
            first = %cmd.first,
            second = %cmd.second,
            outcome = %cmd.outcome,
            "Judgment recorded"
        );

        let envelope = JudgmentRecorded::from_pair(&pair)
            .to_envelope()?
            .with_correlation_id(metadata.correlation_id());
        debug!(event_type = %envelope.event_type, "Publishing event");
        self.event_publisher.publish(envelope).await?;

        Ok(pair)
    }
}

/// Validates both alternatives against `known` and builds the pair.
pub(crate) fn build_pair(
    known: &[AlternativeId],
    decision_maker_id: DecisionMakerId,
    first: AlternativeId,
    second: AlternativeId,
    outcome: Outcome,
) -> Result<JudgmentPair, EngineError> {
    for id in [first, second] {
        if !known.contains(&id) {
            return Err(EngineError::invalid_pair(format!("unknown alternative {}", id)));
        }
    }
    JudgmentPair::new(decision_maker_id, first, second, outcome)
}

pub(crate) fn unknown_decision_maker(id: DecisionMakerId) -> EngineError {
    EngineError::invalid_pair(format!("unknown decision maker {}", id))
}
