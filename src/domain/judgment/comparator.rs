//! Pairwise Comparator - advisory per-criterion view of two alternatives.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::alternatives::Profile;
use crate::domain::criteria::Mark;
use crate::domain::foundation::{AlternativeId, CriterionId, EngineError, MarkId, Percentage};

/// Normalized values of both alternatives on one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionComparison {
    pub criterion_id: CriterionId,
    pub first_value: Percentage,
    pub second_value: Percentage,
}

impl CriterionComparison {
    fn winning_value(&self) -> Percentage {
        self.first_value.max(self.second_value)
    }
}

/// Criteria partitioned by which alternative scores higher on them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonView {
    pub first_advantages: Vec<CriterionComparison>,
    pub second_advantages: Vec<CriterionComparison>,
    pub ties: Vec<CriterionComparison>,
}

/// Builds comparison suggestions from normalized profiles.
pub struct PairwiseComparator;

impl PairwiseComparator {
    /// Compares two profiles criterion by criterion.
    ///
    /// # Algorithm
    /// Higher normalized value wins (direction is already folded into
    /// normalization). Each list is sorted by the winning side's normalized
    /// value, descending. Nothing is written; the caller decides the judgment.
    ///
    /// # Errors
    /// - `InvalidPair` when both profiles belong to the same alternative
    /// - `UnknownMark` when a profile points at a mark not in `marks`
    /// - `MissingNormalizedMark` when either side lacks a normalized mark for
    ///   a criterion present in the other profile
    pub fn suggest(
        first: &Profile,
        second: &Profile,
        marks: &[Mark],
    ) -> Result<ComparisonView, EngineError> {
        if first.alternative_id == second.alternative_id {
            return Err(EngineError::invalid_pair(format!(
                "alternative {} cannot be compared with itself",
                first.alternative_id
            )));
        }

        let by_id: HashMap<MarkId, &Mark> = marks.iter().map(|m| (m.id, m)).collect();

        let mut criteria: Vec<CriterionId> = first.vectors.iter().map(|v| v.criterion_id).collect();
        for vector in &second.vectors {
            if !criteria.contains(&vector.criterion_id) {
                criteria.push(vector.criterion_id);
            }
        }

        let mut view = ComparisonView::default();
        for criterion_id in criteria {
            let comparison = CriterionComparison {
                criterion_id,
                first_value: normalized_value(first, criterion_id, &by_id)?,
                second_value: normalized_value(second, criterion_id, &by_id)?,
            };
            match comparison.first_value.cmp(&comparison.second_value) {
                std::cmp::Ordering::Greater => view.first_advantages.push(comparison),
                std::cmp::Ordering::Less => view.second_advantages.push(comparison),
                std::cmp::Ordering::Equal => view.ties.push(comparison),
            }
        }

        for list in [
            &mut view.first_advantages,
            &mut view.second_advantages,
            &mut view.ties,
        ] {
            list.sort_by(|a, b| b.winning_value().cmp(&a.winning_value()));
        }

        Ok(view)
    }
}

fn normalized_value(
    profile: &Profile,
    criterion_id: CriterionId,
    marks: &HashMap<MarkId, &Mark>,
) -> Result<Percentage, EngineError> {
    let missing = |alternative: AlternativeId| EngineError::MissingNormalizedMark {
        alternative,
        criterion: criterion_id,
    };

    let mark_id = profile
        .mark_for(&criterion_id)
        .ok_or_else(|| missing(profile.alternative_id))?;
    let mark = marks
        .get(&mark_id)
        .ok_or(EngineError::UnknownMark(mark_id))?;
    mark.normalized.ok_or_else(|| missing(profile.alternative_id))
}
