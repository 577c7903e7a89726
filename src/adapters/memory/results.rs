//! In-memory aggregated result repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::analysis::AggregatedResult;
use crate::domain::foundation::{AlternativeId, DecisionMakerId, DomainError};
use crate::ports::ResultRepository;

/// In-memory storage for cached Copeland scores.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResultRepository {
    results: Arc<RwLock<Vec<AggregatedResult>>>,
}

impl InMemoryResultRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultRepository for InMemoryResultRepository {
    async fn replace_results(
        &self,
        decision_maker_id: &DecisionMakerId,
        results: &[AggregatedResult],
    ) -> Result<(), DomainError> {
        let mut stored = self.results.write().await;
        stored.retain(|r| &r.decision_maker_id != decision_maker_id);
        stored.extend(
            results
                .iter()
                .filter(|r| &r.decision_maker_id == decision_maker_id)
                .copied(),
        );
        Ok(())
    }

    async fn find_by_decision_maker(&self, id: &DecisionMakerId) -> Result<Vec<AggregatedResult>, DomainError> {
        Ok(self
            .results
            .read()
            .await
            .iter()
            .filter(|r| &r.decision_maker_id == id)
            .copied()
            .collect())
    }

    async fn list(&self) -> Result<Vec<AggregatedResult>, DomainError> {
        Ok(self.results.read().await.clone())
    }

    async fn delete_by_alternative(&self, id: &AlternativeId) -> Result<(), DomainError> {
        self.results.write().await.retain(|r| &r.alternative_id != id);
        Ok(())
    }

    async fn delete_by_decision_maker(&self, id: &DecisionMakerId) -> Result<(), DomainError> {
        self.results.write().await.retain(|r| &r.decision_maker_id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(dm: DecisionMakerId, weight: u32) -> AggregatedResult {
        AggregatedResult {
            decision_maker_id: dm,
            alternative_id: AlternativeId::new(),
            weight,
        }
    }

    #[tokio::test]
    async fn replace_results_only_touches_one_decision_maker() {
        let repo = InMemoryResultRepository::new();
        let (dm1, dm2) = (DecisionMakerId::new(), DecisionMakerId::new());
        repo.replace_results(&dm1, &[row(dm1, 1), row(dm1, 2)]).await.unwrap();
        repo.replace_results(&dm2, &[row(dm2, 7)]).await.unwrap();

        repo.replace_results(&dm1, &[row(dm1, 3)]).await.unwrap();

        let dm1_rows = repo.find_by_decision_maker(&dm1).await.unwrap();
        assert_eq!(dm1_rows.len(), 1);
        assert_eq!(dm1_rows[0].weight, 3);
        assert_eq!(repo.find_by_decision_maker(&dm2).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rows_for_other_decision_makers_are_not_written() {
        let repo = InMemoryResultRepository::new();
        let (dm1, dm2) = (DecisionMakerId::new(), DecisionMakerId::new());
        repo.replace_results(&dm1, &[row(dm2, 1)]).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }
}
