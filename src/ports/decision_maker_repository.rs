//! Decision maker and peer comparison repository ports.

use async_trait::async_trait;

use crate::domain::foundation::{DecisionMakerId, DomainError};
use crate::domain::panel::{DecisionMaker, DecisionMakerPriority, PeerComparison};

/// Repository port for decision makers.
#[async_trait]
pub trait DecisionMakerRepository: Send + Sync {
    /// Insert or replace a decision maker.
    async fn save(&self, decision_maker: &DecisionMaker) -> Result<(), DomainError>;

    /// Find a decision maker by ID.
    async fn find_by_id(&self, id: &DecisionMakerId) -> Result<Option<DecisionMaker>, DomainError>;

    /// All decision makers in insertion order. This is the matrix order.
    async fn list(&self) -> Result<Vec<DecisionMaker>, DomainError>;

    /// Overwrite the priority of every decision maker in one write.
    ///
    /// Decision makers not listed are reset to `None`.
    async fn replace_priorities(&self, priorities: &[DecisionMakerPriority]) -> Result<(), DomainError>;

    /// Delete a decision maker.
    async fn delete(&self, id: &DecisionMakerId) -> Result<(), DomainError>;
}

/// Repository port for directed peer comparisons.
#[async_trait]
pub trait PeerComparisonRepository: Send + Sync {
    /// Upsert the comparison of `master` over `target`.
    async fn save(&self, comparison: &PeerComparison) -> Result<(), DomainError>;

    /// All stored comparisons.
    async fn list(&self) -> Result<Vec<PeerComparison>, DomainError>;

    /// Delete every comparison naming the decision maker on either side.
    async fn delete_by_decision_maker(&self, id: &DecisionMakerId) -> Result<(), DomainError>;
}
