//! Criterion repository port.
//!
//! Criteria and their marks are stored separately; normalization writes go
//! through [`MarkRepository::replace_normalized`] so every mark of a
//! criterion changes in one call.

use async_trait::async_trait;

use crate::domain::criteria::{Criterion, Mark, NormalizedMark};
use crate::domain::foundation::{CriterionId, DomainError, MarkId};

/// Repository port for criteria.
#[async_trait]
pub trait CriterionRepository: Send + Sync {
    /// Insert or replace a criterion.
    async fn save(&self, criterion: &Criterion) -> Result<(), DomainError>;

    /// Find a criterion by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &CriterionId) -> Result<Option<Criterion>, DomainError>;

    /// All criteria in insertion order.
    async fn list(&self) -> Result<Vec<Criterion>, DomainError>;

    /// Delete a criterion. Marks are removed separately.
    async fn delete(&self, id: &CriterionId) -> Result<(), DomainError>;
}

/// Repository port for marks.
#[async_trait]
pub trait MarkRepository: Send + Sync {
    /// Insert or replace a mark.
    async fn save(&self, mark: &Mark) -> Result<(), DomainError>;

    /// Find a mark by its ID.
    async fn find_by_id(&self, id: &MarkId) -> Result<Option<Mark>, DomainError>;

    /// Marks of one criterion in insertion order.
    async fn find_by_criterion(&self, criterion_id: &CriterionId) -> Result<Vec<Mark>, DomainError>;

    /// All marks in insertion order.
    async fn list(&self) -> Result<Vec<Mark>, DomainError>;

    /// Overwrite the normalized value of every listed mark in one write.
    ///
    /// Marks of the criterion missing from `normalized` are reset to
    /// `None`.
    ///
    /// # Errors
    ///
    /// - `MarkNotFound` if a listed mark does not belong to the criterion;
    ///   nothing is written in that case
    async fn replace_normalized(
        &self,
        criterion_id: &CriterionId,
        normalized: &[NormalizedMark],
    ) -> Result<(), DomainError>;

    /// Delete every mark of a criterion, returning the removed IDs.
    async fn delete_by_criterion(&self, criterion_id: &CriterionId) -> Result<Vec<MarkId>, DomainError>;
}
