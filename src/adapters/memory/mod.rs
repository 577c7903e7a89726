//! In-memory repository adapters.
//!
//! Each repository guards its state with one `tokio::sync::RwLock`, so every
//! port call is a single atomic read or write.

mod alternatives;
mod criteria;
mod judgments;
mod panel;
mod results;

pub use alternatives::{InMemoryAlternativeRepository, InMemoryProfileRepository};
pub use criteria::{InMemoryCriterionRepository, InMemoryMarkRepository};
pub use judgments::InMemoryJudgmentRepository;
pub use panel::{InMemoryDecisionMakerRepository, InMemoryPeerComparisonRepository};
pub use results::InMemoryResultRepository;

use std::sync::Arc;

use crate::ports::{
    AlternativeRepository, CriterionRepository, DecisionMakerRepository, JudgmentRepository,
    MarkRepository, PeerComparisonRepository, ProfileRepository, ResultRepository,
};

/// One instance of every in-memory repository.
///
/// Clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepositories {
    pub criteria: InMemoryCriterionRepository,
    pub marks: InMemoryMarkRepository,
    pub alternatives: InMemoryAlternativeRepository,
    pub profiles: InMemoryProfileRepository,
    pub judgments: InMemoryJudgmentRepository,
    pub decision_makers: InMemoryDecisionMakerRepository,
    pub peer_comparisons: InMemoryPeerComparisonRepository,
    pub results: InMemoryResultRepository,
}

impl InMemoryRepositories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criterion_repository(&self) -> Arc<dyn CriterionRepository> {
        Arc::new(self.criteria.clone())
    }

    pub fn mark_repository(&self) -> Arc<dyn MarkRepository> {
        Arc::new(self.marks.clone())
    }

    pub fn alternative_repository(&self) -> Arc<dyn AlternativeRepository> {
        Arc::new(self.alternatives.clone())
    }

    pub fn profile_repository(&self) -> Arc<dyn ProfileRepository> {
        Arc::new(self.profiles.clone())
    }

    pub fn judgment_repository(&self) -> Arc<dyn JudgmentRepository> {
        Arc::new(self.judgments.clone())
    }

    pub fn decision_maker_repository(&self) -> Arc<dyn DecisionMakerRepository> {
        Arc::new(self.decision_makers.clone())
    }

    pub fn peer_comparison_repository(&self) -> Arc<dyn PeerComparisonRepository> {
        Arc::new(self.peer_comparisons.clone())
    }

    pub fn result_repository(&self) -> Arc<dyn ResultRepository> {
        Arc::new(self.results.clone())
    }
}
