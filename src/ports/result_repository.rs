//! Aggregated result repository port.
//!
//! Stored Copeland scores are a cache; they are only ever replaced
//! wholesale for one decision maker.

use async_trait::async_trait;

use crate::domain::analysis::AggregatedResult;
use crate::domain::foundation::{AlternativeId, DecisionMakerId, DomainError};

/// Repository port for per-decision-maker Copeland scores.
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// Replace every stored result of the decision maker in one write.
    async fn replace_results(
        &self,
        decision_maker_id: &DecisionMakerId,
        results: &[AggregatedResult],
    ) -> Result<(), DomainError>;

    /// Results of one decision maker.
    async fn find_by_decision_maker(&self, id: &DecisionMakerId) -> Result<Vec<AggregatedResult>, DomainError>;

    /// All stored results.
    async fn list(&self) -> Result<Vec<AggregatedResult>, DomainError>;

    /// Delete every result naming the alternative.
    async fn delete_by_alternative(&self, id: &AlternativeId) -> Result<(), DomainError>;

    /// Delete the results of a decision maker.
    async fn delete_by_decision_maker(&self, id: &DecisionMakerId) -> Result<(), DomainError>;
}
