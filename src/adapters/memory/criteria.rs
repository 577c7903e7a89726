//! In-memory criterion and mark repositories.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::criteria::{Criterion, Mark, NormalizedMark};
use crate::domain::foundation::{CriterionId, DomainError, ErrorCode, MarkId};
use crate::ports::{CriterionRepository, MarkRepository};

/// In-memory storage for criteria.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCriterionRepository {
    criteria: Arc<RwLock<Vec<Criterion>>>,
}

impl InMemoryCriterionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CriterionRepository for InMemoryCriterionRepository {
    async fn save(&self, criterion: &Criterion) -> Result<(), DomainError> {
        let mut criteria = self.criteria.write().await;
        match criteria.iter_mut().find(|c| c.id == criterion.id) {
            Some(existing) => *existing = criterion.clone(),
            None => criteria.push(criterion.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &CriterionId) -> Result<Option<Criterion>, DomainError> {
        Ok(self.criteria.read().await.iter().find(|c| &c.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Criterion>, DomainError> {
        Ok(self.criteria.read().await.clone())
    }

    async fn delete(&self, id: &CriterionId) -> Result<(), DomainError> {
        self.criteria.write().await.retain(|c| &c.id != id);
        Ok(())
    }
}

/// In-memory storage for marks.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarkRepository {
    marks: Arc<RwLock<Vec<Mark>>>,
}

impl InMemoryMarkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MarkRepository for InMemoryMarkRepository {
    async fn save(&self, mark: &Mark) -> Result<(), DomainError> {
        let mut marks = self.marks.write().await;
        match marks.iter_mut().find(|m| m.id == mark.id) {
            Some(existing) => *existing = mark.clone(),
            None => marks.push(mark.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &MarkId) -> Result<Option<Mark>, DomainError> {
        Ok(self.marks.read().await.iter().find(|m| &m.id == id).cloned())
    }

    async fn find_by_criterion(&self, criterion_id: &CriterionId) -> Result<Vec<Mark>, DomainError> {
        Ok(self
            .marks
            .read()
            .await
            .iter()
            .filter(|m| &m.criterion_id == criterion_id)
            .cloned()
            .collect())
    }

    async fn list(&self) -> Result<Vec<Mark>, DomainError> {
        Ok(self.marks.read().await.clone())
    }

    async fn replace_normalized(
        &self,
        criterion_id: &CriterionId,
        normalized: &[NormalizedMark],
    ) -> Result<(), DomainError> {
        let mut marks = self.marks.write().await;

        let values: HashMap<MarkId, NormalizedMark> =
            normalized.iter().map(|n| (n.mark_id, *n)).collect();
        for mark_id in values.keys() {
            let owned = marks
                .iter()
                .any(|m| &m.id == mark_id && &m.criterion_id == criterion_id);
            if !owned {
                return Err(DomainError::new(
                    ErrorCode::MarkNotFound,
                    format!("Mark {} does not belong to criterion {}", mark_id, criterion_id),
                ));
            }
        }

        for mark in marks.iter_mut().filter(|m| &m.criterion_id == criterion_id) {
            mark.normalized = values.get(&mark.id).map(|n| n.value);
        }
        Ok(())
    }

    async fn delete_by_criterion(&self, criterion_id: &CriterionId) -> Result<Vec<MarkId>, DomainError> {
        let mut marks = self.marks.write().await;
        let removed = marks
            .iter()
            .filter(|m| &m.criterion_id == criterion_id)
            .map(|m| m.id)
            .collect();
        marks.retain(|m| &m.criterion_id != criterion_id);
        Ok(removed)
    }
}
