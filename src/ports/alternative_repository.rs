//! Alternative and profile repository ports.

use async_trait::async_trait;

use crate::domain::alternatives::{Alternative, Profile};
use crate::domain::foundation::{AlternativeId, DomainError, MarkId};

/// Repository port for alternatives.
#[async_trait]
pub trait AlternativeRepository: Send + Sync {
    /// Insert or replace an alternative.
    async fn save(&self, alternative: &Alternative) -> Result<(), DomainError>;

    /// Find an alternative by its ID.
    async fn find_by_id(&self, id: &AlternativeId) -> Result<Option<Alternative>, DomainError>;

    /// All alternatives in insertion order. Analyses use this order.
    async fn list(&self) -> Result<Vec<Alternative>, DomainError>;

    /// Delete an alternative.
    async fn delete(&self, id: &AlternativeId) -> Result<(), DomainError>;
}

/// Repository port for alternative profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Replace all vectors of the profile's alternative.
    async fn replace(&self, profile: &Profile) -> Result<(), DomainError>;

    /// Profile of one alternative, `None` when nothing was assigned.
    async fn find_by_alternative(&self, id: &AlternativeId) -> Result<Option<Profile>, DomainError>;

    /// All stored profiles.
    async fn list(&self) -> Result<Vec<Profile>, DomainError>;

    /// Delete the profile of an alternative.
    async fn delete_by_alternative(&self, id: &AlternativeId) -> Result<(), DomainError>;

    /// Remove every vector pointing at one of the given marks.
    async fn drop_marks(&self, marks: &[MarkId]) -> Result<(), DomainError>;
}
