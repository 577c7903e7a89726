//! Shared fixtures for handler tests.
//!
//! The `Failing*` doubles delegate reads to an in-memory repository and
//! reject the writes a handler's error path depends on.

use async_trait::async_trait;
use std::sync::Arc;

use crate::adapters::memory::{
    InMemoryDecisionMakerRepository, InMemoryJudgmentRepository, InMemoryMarkRepository,
};
use crate::adapters::{InMemoryEventBus, InMemoryRepositories};
use crate::domain::criteria::{Mark, NormalizedMark};
use crate::domain::foundation::{
    AlternativeId, CriterionId, DecisionMakerId, DomainError, ErrorCode, EventEnvelope, MarkId,
};
use crate::domain::judgment::{Judgment, JudgmentPair};
use crate::domain::panel::{DecisionMaker, DecisionMakerPriority};
use crate::ports::{DecisionMakerRepository, EventPublisher, JudgmentRepository, MarkRepository};

/// In-memory repositories plus a recording event bus.
pub struct TestContext {
    pub repos: InMemoryRepositories,
    pub bus: Arc<InMemoryEventBus>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            repos: InMemoryRepositories::new(),
            bus: Arc::new(InMemoryEventBus::new()),
        }
    }

    pub fn publisher(&self) -> Arc<dyn EventPublisher> {
        self.bus.clone()
    }
}

fn simulated(operation: &str) -> DomainError {
    DomainError::new(ErrorCode::StorageError, format!("Simulated {} failure", operation))
}

/// Publisher whose every call fails.
pub struct FailingEventPublisher;

#[async_trait]
impl EventPublisher for FailingEventPublisher {
    async fn publish(&self, _event: EventEnvelope) -> Result<(), DomainError> {
        Err(simulated("publish"))
    }

    async fn publish_all(&self, _events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        Err(simulated("publish"))
    }
}

/// Mark repository that rejects `replace_normalized`.
pub struct FailingMarkRepository {
    inner: InMemoryMarkRepository,
}

impl FailingMarkRepository {
    pub fn new(inner: InMemoryMarkRepository) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl MarkRepository for FailingMarkRepository {
    async fn save(&self, mark: &Mark) -> Result<(), DomainError> {
        self.inner.save(mark).await
    }

    async fn find_by_id(&self, id: &MarkId) -> Result<Option<Mark>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_criterion(&self, criterion_id: &CriterionId) -> Result<Vec<Mark>, DomainError> {
        self.inner.find_by_criterion(criterion_id).await
    }

    async fn list(&self) -> Result<Vec<Mark>, DomainError> {
        self.inner.list().await
    }

    async fn replace_normalized(
        &self,
        _criterion_id: &CriterionId,
        _normalized: &[NormalizedMark],
    ) -> Result<(), DomainError> {
        Err(simulated("replace_normalized"))
    }

    async fn delete_by_criterion(&self, criterion_id: &CriterionId) -> Result<Vec<MarkId>, DomainError> {
        self.inner.delete_by_criterion(criterion_id).await
    }
}

/// Judgment repository that rejects `record` and `record_all`.
pub struct FailingJudgmentRepository {
    inner: InMemoryJudgmentRepository,
}

impl FailingJudgmentRepository {
    pub fn new(inner: InMemoryJudgmentRepository) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl JudgmentRepository for FailingJudgmentRepository {
    async fn record(&self, _pair: &JudgmentPair) -> Result<(), DomainError> {
        Err(simulated("record"))
    }

    async fn record_all(&self, _pairs: &[JudgmentPair]) -> Result<(), DomainError> {
        Err(simulated("record"))
    }

    async fn seed_reflexive(&self, judgment: &Judgment) -> Result<(), DomainError> {
        self.inner.seed_reflexive(judgment).await
    }

    async fn find_by_decision_maker(&self, id: &DecisionMakerId) -> Result<Vec<Judgment>, DomainError> {
        self.inner.find_by_decision_maker(id).await
    }

    async fn delete_by_alternative(&self, id: &AlternativeId) -> Result<(), DomainError> {
        self.inner.delete_by_alternative(id).await
    }

    async fn delete_by_decision_maker(&self, id: &DecisionMakerId) -> Result<(), DomainError> {
        self.inner.delete_by_decision_maker(id).await
    }
}

/// Decision maker repository that rejects `replace_priorities`.
pub struct FailingDecisionMakerRepository {
    inner: InMemoryDecisionMakerRepository,
}

impl FailingDecisionMakerRepository {
    pub fn new(inner: InMemoryDecisionMakerRepository) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DecisionMakerRepository for FailingDecisionMakerRepository {
    async fn save(&self, decision_maker: &DecisionMaker) -> Result<(), DomainError> {
        self.inner.save(decision_maker).await
    }

    async fn find_by_id(&self, id: &DecisionMakerId) -> Result<Option<DecisionMaker>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn list(&self) -> Result<Vec<DecisionMaker>, DomainError> {
        self.inner.list().await
    }

    async fn replace_priorities(&self, _priorities: &[DecisionMakerPriority]) -> Result<(), DomainError> {
        Err(simulated("replace_priorities"))
    }

    async fn delete(&self, id: &DecisionMakerId) -> Result<(), DomainError> {
        self.inner.delete(id).await
    }
}
