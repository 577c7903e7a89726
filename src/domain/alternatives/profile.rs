//! Profile - the marks an alternative receives, one per criterion.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::criteria::{Criterion, Mark};
use crate::domain::foundation::{AlternativeId, CriterionId, EngineError, MarkId};

/// Assignment of one mark to an (alternative, criterion) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector {
    pub criterion_id: CriterionId,
    pub mark_id: MarkId,
}

/// All vectors of one alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub alternative_id: AlternativeId,
    pub vectors: Vec<Vector>,
}

impl Profile {
    /// Creates an empty profile.
    pub fn empty(alternative_id: AlternativeId) -> Self {
        Self {
            alternative_id,
            vectors: Vec::new(),
        }
    }

    /// Builds a profile from the chosen marks.
    ///
    /// Each mark must sit on a different criterion; two marks on the same
    /// criterion are rejected.
    pub fn from_marks(alternative_id: AlternativeId, marks: &[&Mark]) -> Result<Self, EngineError> {
        let mut seen = HashSet::new();
        let mut vectors = Vec::with_capacity(marks.len());
        for mark in marks {
            if !seen.insert(mark.criterion_id) {
                return Err(EngineError::DuplicateCriterion(mark.criterion_id));
            }
            vectors.push(Vector {
                criterion_id: mark.criterion_id,
                mark_id: mark.id,
            });
        }
        Ok(Self {
            alternative_id,
            vectors,
        })
    }

    /// Returns the mark chosen for a criterion.
    pub fn mark_for(&self, criterion_id: &CriterionId) -> Option<MarkId> {
        self.vectors
            .iter()
            .find(|v| &v.criterion_id == criterion_id)
            .map(|v| v.mark_id)
    }

    /// Criteria that have no mark in this profile.
    pub fn missing_criteria<'a>(&self, criteria: &'a [Criterion]) -> Vec<&'a Criterion> {
        criteria
            .iter()
            .filter(|c| self.mark_for(&c.id).is_none())
            .collect()
    }

    /// A profile is complete when it covers every criterion.
    pub fn is_complete(&self, criteria: &[Criterion]) -> bool {
        self.missing_criteria(criteria).is_empty()
    }

    /// Removes vectors that point at any of the given marks.
    pub fn drop_marks(&mut self, marks: &[MarkId]) {
        self.vectors.retain(|v| !marks.contains(&v.mark_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::criteria::CriterionKind;

    fn criterion(name: &str) -> Criterion {
        Criterion::new(name, 1, CriterionKind::Quantitative).unwrap()
    }

    #[test]
    fn profile_from_marks_maps_each_criterion() {
        let price = criterion("Price");
        let range = criterion("Range");
        let cheap = Mark::new(price.id, "cheap", 10);
        let far = Mark::new(range.id, "far", 500);
        let alt = AlternativeId::new();

        let profile = Profile::from_marks(alt, &[&cheap, &far]).unwrap();
        assert_eq!(profile.mark_for(&price.id), Some(cheap.id));
        assert_eq!(profile.mark_for(&range.id), Some(far.id));
        assert!(profile.is_complete(&[price, range]));
    }

    #[test]
    fn two_marks_on_one_criterion_are_rejected() {
        let price = criterion("Price");
        let a = Mark::new(price.id, "a", 1);
        let b = Mark::new(price.id, "b", 2);
        let err = Profile::from_marks(AlternativeId::new(), &[&a, &b]).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateCriterion(id) if id == price.id));
    }

    #[test]
    fn partial_profile_reports_missing_criteria() {
        let price = criterion("Price");
        let range = criterion("Range");
        let cheap = Mark::new(price.id, "cheap", 10);
        let profile = Profile::from_marks(AlternativeId::new(), &[&cheap]).unwrap();

        let criteria = vec![price, range.clone()];
        let missing = profile.missing_criteria(&criteria);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].id, range.id);
        assert!(!profile.is_complete(&criteria));
    }

    #[test]
    fn drop_marks_removes_vectors() {
        let price = criterion("Price");
        let cheap = Mark::new(price.id, "cheap", 10);
        let mut profile = Profile::from_marks(AlternativeId::new(), &[&cheap]).unwrap();
        profile.drop_marks(&[cheap.id]);
        assert!(profile.vectors.is_empty());
    }
}
