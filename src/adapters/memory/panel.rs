//! In-memory decision maker and peer comparison repositories.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DecisionMakerId, DomainError};
use crate::domain::panel::{DecisionMaker, DecisionMakerPriority, PeerComparison};
use crate::ports::{DecisionMakerRepository, PeerComparisonRepository};

/// In-memory storage for decision makers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDecisionMakerRepository {
    decision_makers: Arc<RwLock<Vec<DecisionMaker>>>,
}

impl InMemoryDecisionMakerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DecisionMakerRepository for InMemoryDecisionMakerRepository {
    async fn save(&self, decision_maker: &DecisionMaker) -> Result<(), DomainError> {
        let mut decision_makers = self.decision_makers.write().await;
        match decision_makers.iter_mut().find(|d| d.id == decision_maker.id) {
            Some(existing) => *existing = decision_maker.clone(),
            None => decision_makers.push(decision_maker.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &DecisionMakerId) -> Result<Option<DecisionMaker>, DomainError> {
        Ok(self
            .decision_makers
            .read()
            .await
            .iter()
            .find(|d| &d.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<DecisionMaker>, DomainError> {
        Ok(self.decision_makers.read().await.clone())
    }

    async fn replace_priorities(&self, priorities: &[DecisionMakerPriority]) -> Result<(), DomainError> {
        let by_id: HashMap<DecisionMakerId, i64> = priorities
            .iter()
            .map(|p| (p.decision_maker_id, p.priority))
            .collect();
        for decision_maker in self.decision_makers.write().await.iter_mut() {
            decision_maker.priority = by_id.get(&decision_maker.id).copied();
        }
        Ok(())
    }

    async fn delete(&self, id: &DecisionMakerId) -> Result<(), DomainError> {
        self.decision_makers.write().await.retain(|d| &d.id != id);
        Ok(())
    }
}

/// In-memory storage for peer comparisons, keyed by (master, target).
#[derive(Debug, Clone, Default)]
pub struct InMemoryPeerComparisonRepository {
    comparisons: Arc<RwLock<Vec<PeerComparison>>>,
}

impl InMemoryPeerComparisonRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PeerComparisonRepository for InMemoryPeerComparisonRepository {
    async fn save(&self, comparison: &PeerComparison) -> Result<(), DomainError> {
        let mut comparisons = self.comparisons.write().await;
        match comparisons
            .iter_mut()
            .find(|c| c.master == comparison.master && c.target == comparison.target)
        {
            Some(existing) => *existing = *comparison,
            None => comparisons.push(*comparison),
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<PeerComparison>, DomainError> {
        Ok(self.comparisons.read().await.clone())
    }

    async fn delete_by_decision_maker(&self, id: &DecisionMakerId) -> Result<(), DomainError> {
        self.comparisons
            .write()
            .await
            .retain(|c| &c.master != id && &c.target != id);
        Ok(())
    }
}
