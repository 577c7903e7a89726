//! RemoveAlternativeHandler - deletes an alternative and everything naming it.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{AlternativeId, CommandMetadata, EngineError};
use crate::ports::{AlternativeRepository, JudgmentRepository, ProfileRepository, ResultRepository};

/// Command to remove an alternative.
#[derive(Debug, Clone)]
pub struct RemoveAlternativeCommand {
    pub alternative_id: AlternativeId,
}

/// Handler for removing alternatives.
///
/// Removes the profile, every judgment naming the alternative for all
/// decision makers, and its cached results.
pub struct RemoveAlternativeHandler {
    alternatives: Arc<dyn AlternativeRepository>,
    profiles: Arc<dyn ProfileRepository>,
    judgments: Arc<dyn JudgmentRepository>,
    results: Arc<dyn ResultRepository>,
}

impl RemoveAlternativeHandler {
    pub fn new(
        alternatives: Arc<dyn AlternativeRepository>,
        profiles: Arc<dyn ProfileRepository>,
        judgments: Arc<dyn JudgmentRepository>,
        results: Arc<dyn ResultRepository>,
    ) -> Self {
        Self {
            alternatives,
            profiles,
            judgments,
            results,
        }
    }

    pub async fn handle(&self, cmd: RemoveAlternativeCommand, metadata: CommandMetadata) -> Result<(), EngineError> {
        if self.alternatives.find_by_id(&cmd.alternative_id).await?.is_none() {
            return Err(EngineError::UnknownAlternative(cmd.alternative_id));
        }

        self.judgments.delete_by_alternative(&cmd.alternative_id).await?;
        self.results.delete_by_alternative(&cmd.alternative_id).await?;
        self.profiles.delete_by_alternative(&cmd.alternative_id).await?;
        self.alternatives.delete(&cmd.alternative_id).await?;

        info!(
            alternative_id = %cmd.alternative_id,
            correlation_id = metadata.correlation_id(),
            "Alternative removed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestContext;
    use crate::domain::alternatives::{Alternative, Profile};
    use crate::domain::analysis::AggregatedResult;
    use crate::domain::foundation::DecisionMakerId;
    use crate::domain::judgment::{JudgmentPair, Outcome};

    #[tokio::test]
    async fn cascades_to_profile_judgments_and_results() {
        let ctx = TestContext::new();
        let tram = Alternative::new("Tram").unwrap();
        let bus = Alternative::new("Bus").unwrap();
        ctx.repos.alternative_repository().save(&tram).await.unwrap();
        ctx.repos.alternative_repository().save(&bus).await.unwrap();
        ctx.repos.profile_repository().replace(&Profile::empty(tram.id)).await.unwrap();
        let dm = DecisionMakerId::new();
        ctx.repos
            .judgment_repository()
            .record(&JudgmentPair::new(dm, tram.id, bus.id, Outcome::Greater).unwrap())
            .await
            .unwrap();
        ctx.repos
            .result_repository()
            .replace_results(
                &dm,
                &[
                    AggregatedResult { decision_maker_id: dm, alternative_id: tram.id, weight: 1 },
                    AggregatedResult { decision_maker_id: dm, alternative_id: bus.id, weight: 0 },
                ],
            )
            .await
            .unwrap();

        let handler = RemoveAlternativeHandler::new(
            ctx.repos.alternative_repository(),
            ctx.repos.profile_repository(),
            ctx.repos.judgment_repository(),
            ctx.repos.result_repository(),
        );
        handler
            .handle(RemoveAlternativeCommand { alternative_id: tram.id }, CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert_eq!(ctx.repos.alternative_repository().list().await.unwrap(), vec![bus.clone()]);
        assert!(ctx.repos.profile_repository().list().await.unwrap().is_empty());
        assert!(ctx.repos.judgment_repository().find_by_decision_maker(&dm).await.unwrap().is_empty());
        let results = ctx.repos.result_repository().list().await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].alternative_id, bus.id);
    }
}
