//! Judgment repository port.
//!
//! The only write path for a non-reflexive judgment is [`JudgmentRepository::record`],
//! which receives both directions together.

use async_trait::async_trait;

use crate::domain::foundation::{AlternativeId, DecisionMakerId, DomainError};
use crate::domain::judgment::{Judgment, JudgmentPair};

/// Repository port for pairwise alternative judgments.
#[async_trait]
pub trait JudgmentRepository: Send + Sync {
    /// Upsert a judgment and its inverse in one write.
    async fn record(&self, pair: &JudgmentPair) -> Result<(), DomainError>;

    /// Upsert every pair and its inverse in one write.
    ///
    /// Either all pairs are stored or, on error, none are.
    async fn record_all(&self, pairs: &[JudgmentPair]) -> Result<(), DomainError>;

    /// Store the `(A, A) = Equal` entry.
    async fn seed_reflexive(&self, judgment: &Judgment) -> Result<(), DomainError>;

    /// All entries of one decision maker.
    async fn find_by_decision_maker(&self, id: &DecisionMakerId) -> Result<Vec<Judgment>, DomainError>;

    /// Delete every entry naming the alternative, for all decision makers.
    async fn delete_by_alternative(&self, id: &AlternativeId) -> Result<(), DomainError>;

    /// Delete every entry of a decision maker.
    async fn delete_by_decision_maker(&self, id: &DecisionMakerId) -> Result<(), DomainError>;
}
