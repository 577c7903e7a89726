//! RegisterAlternativeHandler - adds an alternative and seeds its self judgments.

use std::sync::Arc;

use tracing::info;

use crate::domain::alternatives::Alternative;
use crate::domain::foundation::{CommandMetadata, EngineError};
use crate::domain::judgment::Judgment;
use crate::ports::{AlternativeRepository, DecisionMakerRepository, JudgmentRepository};

/// Command to register an alternative.
#[derive(Debug, Clone)]
pub struct RegisterAlternativeCommand {
    pub name: String,
}

/// Handler for registering alternatives.
///
/// Seeds `(A, A) = Equal` for every existing decision maker.
pub struct RegisterAlternativeHandler {
    alternatives: Arc<dyn AlternativeRepository>,
    decision_makers: Arc<dyn DecisionMakerRepository>,
    judgments: Arc<dyn JudgmentRepository>,
}

impl RegisterAlternativeHandler {
    pub fn new(
        alternatives: Arc<dyn AlternativeRepository>,
        decision_makers: Arc<dyn DecisionMakerRepository>,
        judgments: Arc<dyn JudgmentRepository>,
    ) -> Self {
        Self {
            alternatives,
            decision_makers,
            judgments,
        }
    }

    pub async fn handle(
        &self,
        cmd: RegisterAlternativeCommand,
        metadata: CommandMetadata,
    ) -> Result<Alternative, EngineError> {
        let alternative = Alternative::new(cmd.name)?;
        self.alternatives.save(&alternative).await?;

        let decision_makers = self.decision_makers.list().await?;
        for decision_maker in &decision_makers {
            self.judgments
                .seed_reflexive(&Judgment::reflexive(decision_maker.id, alternative.id))
                .await?;
        }

        info!(
            alternative_id = %alternative.id,
            seeded = decision_makers.len(),
            correlation_id = metadata.correlation_id(),
            "Alternative registered"
        );
        Ok(alternative)
    }
}
