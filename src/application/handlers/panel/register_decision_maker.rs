//! RegisterDecisionMakerHandler - adds a panel member with its fixed self entries.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CommandMetadata, EngineError};
use crate::domain::judgment::Judgment;
use crate::domain::panel::{DecisionMaker, PeerComparison};
use crate::ports::{
    AlternativeRepository, DecisionMakerRepository, JudgmentRepository, PeerComparisonRepository,
};

/// Command to register a decision maker.
#[derive(Debug, Clone)]
pub struct RegisterDecisionMakerCommand {
    pub name: String,
}

/// Handler for registering decision makers.
///
/// Seeds the self comparison (score 1) and `(A, A) = Equal` for every
/// existing alternative.
pub struct RegisterDecisionMakerHandler {
    decision_makers: Arc<dyn DecisionMakerRepository>,
    peer_comparisons: Arc<dyn PeerComparisonRepository>,
    alternatives: Arc<dyn AlternativeRepository>,
    judgments: Arc<dyn JudgmentRepository>,
}

impl RegisterDecisionMakerHandler {
    pub fn new(
        decision_makers: Arc<dyn DecisionMakerRepository>,
        peer_comparisons: Arc<dyn PeerComparisonRepository>,
        alternatives: Arc<dyn AlternativeRepository>,
        judgments: Arc<dyn JudgmentRepository>,
    ) -> Self {
        Self {
            decision_makers,
            peer_comparisons,
            alternatives,
            judgments,
        }
    }

    pub async fn handle(
        &self,
        cmd: RegisterDecisionMakerCommand,
        metadata: CommandMetadata,
    ) -> Result<DecisionMaker, EngineError> {
        let decision_maker = DecisionMaker::new(cmd.name)?;
        self.decision_makers.save(&decision_maker).await?;
        self.peer_comparisons
            .save(&PeerComparison::reflexive(decision_maker.id))
            .await?;

        let alternatives = self.alternatives.list().await?;
        for alternative in &alternatives {
            self.judgments
                .seed_reflexive(&Judgment::reflexive(decision_maker.id, alternative.id))
                .await?;
        }

        info!(
            decision_maker_id = %decision_maker.id,
            seeded = alternatives.len(),
            correlation_id = metadata.correlation_id(),
            "Decision maker registered"
        );
        Ok(decision_maker)
    }
}
