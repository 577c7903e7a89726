//! In-memory judgment repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{AlternativeId, DecisionMakerId, DomainError};
use crate::domain::judgment::{Judgment, JudgmentPair, Outcome};

use crate::ports::JudgmentRepository;

type JudgmentKey = (DecisionMakerId, AlternativeId, AlternativeId);

/// In-memory storage for judgments, keyed by (decision maker, first, second).
///
/// Both directions of a pair are written under one write lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJudgmentRepository {
    judgments: Arc<RwLock<HashMap<JudgmentKey, Outcome>>>,
}

impl InMemoryJudgmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored directed entries.
    pub async fn entry_count(&self) -> usize {
        self.judgments.read().await.len()
    }
}

#[async_trait]
impl JudgmentRepository for InMemoryJudgmentRepository {
    async fn record(&self, pair: &JudgmentPair) -> Result<(), DomainError> {
        self.record_all(std::slice::from_ref(pair)).await
    }

    async fn record_all(&self, pairs: &[JudgmentPair]) -> Result<(), DomainError> {
        let mut judgments = self.judgments.write().await;
        for judgment in pairs.iter().flat_map(|pair| pair.judgments()) {
            judgments.insert(
                (judgment.decision_maker_id, judgment.first, judgment.second),
                judgment.outcome,
            );
        }
        Ok(())
    }

    async fn seed_reflexive(&self, judgment: &Judgment) -> Result<(), DomainError> {
        self.judgments.write().await.insert(
            (judgment.decision_maker_id, judgment.first, judgment.second),
            judgment.outcome,
        );
        Ok(())
    }

    async fn find_by_decision_maker(&self, id: &DecisionMakerId) -> Result<Vec<Judgment>, DomainError> {
        Ok(self
            .judgments
            .read()
            .await
            .iter()
            .filter(|((dm, _, _), _)| dm == id)
            .map(|((dm, first, second), outcome)| Judgment {
                decision_maker_id: *dm,
                first: *first,
                second: *second,
                outcome: *outcome,
            })
            .collect())
    }

    async fn delete_by_alternative(&self, id: &AlternativeId) -> Result<(), DomainError> {
        self.judgments
            .write()
            .await
            .retain(|(_, first, second), _| first != id && second != id);
        Ok(())
    }

    async fn delete_by_decision_maker(&self, id: &DecisionMakerId) -> Result<(), DomainError> {
        self.judgments.write().await.retain(|(dm, _, _), _| dm != id);
        Ok(())
    }
}
