//! RecordJudgmentsHandler - records a batch of judgments for one decision maker.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{
    AlternativeId, CommandMetadata, DecisionMakerId, EngineError, SerializableDomainEvent,
};
use crate::domain::judgment::{JudgmentPair, JudgmentRecorded, Outcome};
use crate::ports::{AlternativeRepository, DecisionMakerRepository, EventPublisher, JudgmentRepository};

use super::record_judgment::{build_pair, unknown_decision_maker};

/// One entry of a batch.
#[derive(Debug, Clone, Copy)]
pub struct JudgmentInput {
    pub first: AlternativeId,
    pub second: AlternativeId,
    pub outcome: Outcome,
}

/// Command to record many judgments of one decision maker.
#[derive(Debug, Clone)]
pub struct RecordJudgmentsCommand {
    pub decision_maker_id: DecisionMakerId,
    pub judgments: Vec<JudgmentInput>,
}

/// Handler for batch judgment entry.
///
/// Every entry is validated before any is written, then the whole batch is
/// stored in one `record_all` call. Events are published only after the
/// write succeeds.
pub struct RecordJudgmentsHandler {
    alternatives: Arc<dyn AlternativeRepository>,
    decision_makers: Arc<dyn DecisionMakerRepository>,
    judgments: Arc<dyn JudgmentRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RecordJudgmentsHandler {
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
        cmd: RecordJudgmentsCommand,
        metadata: CommandMetadata,
    ) -> Result<Vec<JudgmentPair>, EngineError> {
        if self.decision_makers.find_by_id(&cmd.decision_maker_id).await?.is_none() {
            return Err(unknown_decision_maker(cmd.decision_maker_id));
        }
        let known: Vec<AlternativeId> = self.alternatives.list().await?.iter().map(|a| a.id).collect();

        let pairs = cmd
            .judgments
            .iter()
            .map(|j| build_pair(&known, cmd.decision_maker_id, j.first, j.second, j.outcome))
            .collect::<Result<Vec<_>, _>>()?;

        let envelopes = pairs
            .iter()
            .map(|pair| {
                JudgmentRecorded::from_pair(pair)
                    .to_envelope()
                    .map(|e| e.with_correlation_id(metadata.correlation_id()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.judgments.record_all(&pairs).await?;
        self.event_publisher.publish_all(envelopes).await?;

        info!(
            decision_maker_id = %cmd.decision_maker_id,
            judgments = pairs.len(),
            "Judgments recorded"
        );
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{FailingJudgmentRepository, TestContext};
    use crate::domain::alternatives::Alternative;
    use crate::domain::judgment::PreferenceRelation;
    use crate::domain::panel::DecisionMaker;

    async fn seed(ctx: &TestContext) -> (DecisionMaker, Vec<AlternativeId>) {
        let dm = DecisionMaker::new("Alice").unwrap();
        ctx.repos.decision_maker_repository().save(&dm).await.unwrap();
        let mut ids = Vec::new();
        for name in ["A", "B", "C"] {
            let alt = Alternative::new(name).unwrap();
            ctx.repos.alternative_repository().save(&alt).await.unwrap();
            ids.push(alt.id);
        }
        (dm, ids)
    }

    fn handler(ctx: &TestContext) -> RecordJudgmentsHandler {
        RecordJudgmentsHandler::new(
            ctx.repos.alternative_repository(),
            ctx.repos.decision_maker_repository(),
            ctx.repos.judgment_repository(),
            ctx.publisher(),
        )
    }

    #[tokio::test]
    async fn records_full_tournament() {
        let ctx = TestContext::new();
        let (dm, ids) = seed(&ctx).await;

        let pairs = handler(&ctx)
            .handle(
                RecordJudgmentsCommand {
                    decision_maker_id: dm.id,
                    judgments: vec![
                        JudgmentInput { first: ids[0], second: ids[1], outcome: Outcome::Greater },
                        JudgmentInput { first: ids[1], second: ids[2], outcome: Outcome::Greater },
                        JudgmentInput { first: ids[0], second: ids[2], outcome: Outcome::Greater },
                    ],
                },
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap();

        assert_eq!(pairs.len(), 3);
        let stored = ctx.repos.judgment_repository().find_by_decision_maker(&dm.id).await.unwrap();
        assert!(PreferenceRelation::from_judgments(dm.id, &stored).is_complete(&ids));
        assert_eq!(ctx.bus.events_of_type("judgment.recorded.v1").len(), 3);
    }

    #[tokio::test]
    async fn invalid_entry_writes_nothing() {
        let ctx = TestContext::new();
        let (dm, ids) = seed(&ctx).await;

        let err = handler(&ctx)
            .handle(
                RecordJudgmentsCommand {
                    decision_maker_id: dm.id,
                    judgments: vec![
                        JudgmentInput { first: ids[0], second: ids[1], outcome: Outcome::Greater },
                        JudgmentInput { first: ids[2], second: ids[2], outcome: Outcome::Equal },
                    ],
                },
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::InvalidPair(_)));
        assert!(ctx.repos.judgment_repository().find_by_decision_maker(&dm.id).await.unwrap().is_empty());
        assert_eq!(ctx.bus.event_count(), 0);
    }

    #[tokio::test]
    async fn storage_failure_writes_nothing_and_publishes_nothing() {
        let ctx = TestContext::new();
        let (dm, ids) = seed(&ctx).await;
        let judgments = FailingJudgmentRepository::new(ctx.repos.judgments.clone());
        let handler = RecordJudgmentsHandler::new(
            ctx.repos.alternative_repository(),
            ctx.repos.decision_maker_repository(),
            Arc::new(judgments),
            ctx.publisher(),
        );

        let err = handler
            .handle(
                RecordJudgmentsCommand {
                    decision_maker_id: dm.id,
                    judgments: vec![
                        JudgmentInput { first: ids[0], second: ids[1], outcome: Outcome::Greater },
                        JudgmentInput { first: ids[1], second: ids[2], outcome: Outcome::Less },
                    ],
                },
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::Infrastructure(_)));
        assert_eq!(ctx.repos.judgments.entry_count().await, 0);
        assert_eq!(ctx.bus.event_count(), 0);
    }
}
