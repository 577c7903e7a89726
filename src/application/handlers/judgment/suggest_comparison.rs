//! SuggestComparisonHandler - advisory per-criterion view of two alternatives.

use std::sync::Arc;

use crate::domain::alternatives::Profile;
use crate::domain::foundation::{AlternativeId, EngineError};
use crate::domain::judgment::{ComparisonView, PairwiseComparator};
use crate::ports::{AlternativeRepository, MarkRepository, ProfileRepository};

/// Query comparing two alternatives.
#[derive(Debug, Clone)]
pub struct SuggestComparisonQuery {
    pub first: AlternativeId,
    pub second: AlternativeId,
}

/// Handler for comparison suggestions. Writes nothing.
pub struct SuggestComparisonHandler {
    alternatives: Arc<dyn AlternativeRepository>,
    profiles: Arc<dyn ProfileRepository>,
    marks: Arc<dyn MarkRepository>,
}

impl SuggestComparisonHandler {
    pub fn new(
        alternatives: Arc<dyn AlternativeRepository>,
        profiles: Arc<dyn ProfileRepository>,
        marks: Arc<dyn MarkRepository>,
    ) -> Self {
        Self {
            alternatives,
            profiles,
            marks,
        }
    }

    pub async fn handle(&self, query: SuggestComparisonQuery) -> Result<ComparisonView, EngineError> {
        let first = self.profile_of(query.first).await?;
        let second = self.profile_of(query.second).await?;
        let marks = self.marks.list().await?;
        PairwiseComparator::suggest(&first, &second, &marks)
    }

    async fn profile_of(&self, id: AlternativeId) -> Result<Profile, EngineError> {
        if self.alternatives.find_by_id(&id).await?.is_none() {
            return Err(EngineError::invalid_pair(format!("unknown alternative {}", id)));
        }
        Ok(self
            .profiles
            .find_by_alternative(&id)
            .await?
            .unwrap_or_else(|| Profile::empty(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestContext;
    use crate::domain::alternatives::Alternative;
    use crate::domain::criteria::Mark;
    use crate::domain::foundation::{CriterionId, Percentage};

    #[tokio::test]
    async fn compares_stored_profiles() {
        let ctx = TestContext::new();
        let a = Alternative::new("A").unwrap();
        let b = Alternative::new("B").unwrap();
        ctx.repos.alternative_repository().save(&a).await.unwrap();
        ctx.repos.alternative_repository().save(&b).await.unwrap();

        let criterion = CriterionId::new();
        let mut high = Mark::new(criterion, "high", 10);
        high.normalized = Some(Percentage::HUNDRED);
        let mut low = Mark::new(criterion, "low", 5);
        low.normalized = Some(Percentage::try_new(50).unwrap());
        ctx.repos.mark_repository().save(&high).await.unwrap();
        ctx.repos.mark_repository().save(&low).await.unwrap();
        ctx.repos.profile_repository().replace(&Profile::from_marks(a.id, &[&low]).unwrap()).await.unwrap();
        ctx.repos.profile_repository().replace(&Profile::from_marks(b.id, &[&high]).unwrap()).await.unwrap();

        let handler = SuggestComparisonHandler::new(
            ctx.repos.alternative_repository(),
            ctx.repos.profile_repository(),
            ctx.repos.mark_repository(),
        );
        let view = handler
            .handle(SuggestComparisonQuery { first: a.id, second: b.id })
            .await
            .unwrap();

        assert!(view.first_advantages.is_empty());
        assert_eq!(view.second_advantages.len(), 1);
        assert_eq!(view.second_advantages[0].second_value, Percentage::HUNDRED);
        assert_eq!(ctx.bus.event_count(), 0);
    }

    #[tokio::test]
    async fn unknown_alternative_is_invalid_pair() {
        let ctx = TestContext::new();
        let handler = SuggestComparisonHandler::new(
            ctx.repos.alternative_repository(),
            ctx.repos.profile_repository(),
            ctx.repos.mark_repository(),
        );
        let err = handler
            .handle(SuggestComparisonQuery { first: AlternativeId::new(), second: AlternativeId::new() })
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidPair(_)));
    }
}
