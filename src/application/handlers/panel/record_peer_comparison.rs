//! RecordPeerComparisonHandler - stores the score one decision maker gives another.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CommandMetadata, DecisionMakerId, EngineError};
use crate::domain::panel::PeerComparison;
use crate::ports::{DecisionMakerRepository, PeerComparisonRepository};

/// Command to record `master`'s score for `target`.
#[derive(Debug, Clone)]
pub struct RecordPeerComparisonCommand {
    pub master: DecisionMakerId,
    pub target: DecisionMakerId,
    pub score: i64,
}

/// Handler for peer comparisons.
///
/// The self comparison is fixed at registration and cannot be overwritten.
/// Stored priorities are not refreshed here.
pub struct RecordPeerComparisonHandler {
    decision_makers: Arc<dyn DecisionMakerRepository>,
    peer_comparisons: Arc<dyn PeerComparisonRepository>,
}

impl RecordPeerComparisonHandler {
    pub fn new(
        decision_makers: Arc<dyn DecisionMakerRepository>,
        peer_comparisons: Arc<dyn PeerComparisonRepository>,
    ) -> Self {
        Self {
            decision_makers,
            peer_comparisons,
        }
    }

    pub async fn handle(
        &self,
        cmd: RecordPeerComparisonCommand,
        metadata: CommandMetadata,
    ) -> Result<PeerComparison, EngineError> {
        if cmd.master == cmd.target {
            return Err(EngineError::invalid_pair(format!(
                "decision maker {} cannot rescore itself",
                cmd.master
            )));
        }
        for id in [cmd.master, cmd.target] {
            if self.decision_makers.find_by_id(&id).await?.is_none() {
                return Err(EngineError::UnknownDecisionMaker(id));
            }
        }

        let comparison = PeerComparison {
            master: cmd.master,
            target: cmd.target,
            score: cmd.score,
        };
        self.peer_comparisons.save(&comparison).await?;

        info!(
            master = %cmd.master,
            target = %cmd.target,
            score = cmd.score,
            correlation_id = metadata.correlation_id(),
            "Peer comparison recorded"
        );
        Ok(comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestContext;
    use crate::domain::panel::DecisionMaker;

    fn handler(ctx: &TestContext) -> RecordPeerComparisonHandler {
        RecordPeerComparisonHandler::new(
            ctx.repos.decision_maker_repository(),
            ctx.repos.peer_comparison_repository(),
        )
    }

    #[tokio::test]
    async fn latest_score_wins() {
        let ctx = TestContext::new();
        let alice = DecisionMaker::new("Alice").unwrap();
        let bob = DecisionMaker::new("Bob").unwrap();
        ctx.repos.decision_maker_repository().save(&alice).await.unwrap();
        ctx.repos.decision_maker_repository().save(&bob).await.unwrap();
        let handler = handler(&ctx);

        for score in [2, 3] {
            handler
                .handle(
                    RecordPeerComparisonCommand { master: alice.id, target: bob.id, score },
                    CommandMetadata::test_fixture(),
                )
                .await
                .unwrap();
        }

        let stored = ctx.repos.peer_comparison_repository().list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].score, 3);
    }

    #[tokio::test]
    async fn self_comparison_is_fixed() {
        let ctx = TestContext::new();
        let alice = DecisionMaker::new("Alice").unwrap();
        ctx.repos.decision_maker_repository().save(&alice).await.unwrap();

        let err = handler(&ctx)
            .handle(
                RecordPeerComparisonCommand { master: alice.id, target: alice.id, score: 9 },
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidPair(_)));
    }

    #[tokio::test]
    async fn unknown_target_is_rejected() {
        let ctx = TestContext::new();
        let alice = DecisionMaker::new("Alice").unwrap();
        ctx.repos.decision_maker_repository().save(&alice).await.unwrap();

        let err = handler(&ctx)
            .handle(
                RecordPeerComparisonCommand { master: alice.id, target: DecisionMakerId::new(), score: 1 },
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownDecisionMaker(_)));
    }
}
