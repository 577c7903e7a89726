//! In-memory alternative and profile repositories.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::alternatives::{Alternative, Profile};
use crate::domain::foundation::{AlternativeId, DomainError, MarkId};
use crate::ports::{AlternativeRepository, ProfileRepository};

/// In-memory storage for alternatives.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAlternativeRepository {
    alternatives: Arc<RwLock<Vec<Alternative>>>,
}

impl InMemoryAlternativeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AlternativeRepository for InMemoryAlternativeRepository {
    async fn save(&self, alternative: &Alternative) -> Result<(), DomainError> {
        let mut alternatives = self.alternatives.write().await;
        match alternatives.iter_mut().find(|a| a.id == alternative.id) {
            Some(existing) => *existing = alternative.clone(),
            None => alternatives.push(alternative.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &AlternativeId) -> Result<Option<Alternative>, DomainError> {
        Ok(self
            .alternatives
            .read()
            .await
            .iter()
            .find(|a| &a.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Alternative>, DomainError> {
        Ok(self.alternatives.read().await.clone())
    }

    async fn delete(&self, id: &AlternativeId) -> Result<(), DomainError> {
        self.alternatives.write().await.retain(|a| &a.id != id);
        Ok(())
    }
}

/// In-memory storage for profiles.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<Vec<Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn replace(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        match profiles
            .iter_mut()
            .find(|p| p.alternative_id == profile.alternative_id)
        {
            Some(existing) => *existing = profile.clone(),
            None => profiles.push(profile.clone()),
        }
        Ok(())
    }

    async fn find_by_alternative(&self, id: &AlternativeId) -> Result<Option<Profile>, DomainError> {
        Ok(self
            .profiles
            .read()
            .await
            .iter()
            .find(|p| &p.alternative_id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Profile>, DomainError> {
        Ok(self.profiles.read().await.clone())
    }

    async fn delete_by_alternative(&self, id: &AlternativeId) -> Result<(), DomainError> {
        self.profiles.write().await.retain(|p| &p.alternative_id != id);
        Ok(())
    }

    async fn drop_marks(&self, marks: &[MarkId]) -> Result<(), DomainError> {
        for profile in self.profiles.write().await.iter_mut() {
            profile.drop_marks(marks);
        }
        Ok(())
    }
}
