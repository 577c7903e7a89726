//! Copeland Scorer - win/tie counts over one decision maker's relation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{AlternativeId, DecisionMakerId};
use crate::domain::judgment::{PreferenceRelation, RelationWarning};

/// Stored Copeland score of one alternative for one decision maker.
///
/// These rows are a cache: every scoring run replaces all rows of the
/// decision maker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedResult {
    pub decision_maker_id: DecisionMakerId,
    pub alternative_id: AlternativeId,
    pub weight: u32,
}

/// Scores and winner set for one decision maker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopelandResult {
    pub decision_maker_id: DecisionMakerId,
    pub scores: HashMap<AlternativeId, u32>,
    /// All alternatives sharing the maximum score, in input order.
    pub winners: Vec<AlternativeId>,
    /// Present when some pairs had no judgment.
    pub warning: Option<RelationWarning>,
}

impl CopelandResult {
    /// Returns the score of an alternative.
    pub fn score_of(&self, alternative: &AlternativeId) -> Option<u32> {
        self.scores.get(alternative).copied()
    }

    /// Returns true when every pair was judged.
    pub fn is_complete(&self) -> bool {
        self.warning.is_none()
    }

    /// Rows to store in place of the decision maker's previous results.
    pub fn aggregated_results(&self, alternatives: &[AlternativeId]) -> Vec<AggregatedResult> {
        alternatives
            .iter()
            .filter_map(|alt| {
                self.score_of(alt).map(|weight| AggregatedResult {
                    decision_maker_id: self.decision_maker_id,
                    alternative_id: *alt,
                    weight,
                })
            })
            .collect()
    }
}

/// Copeland scoring functions.
pub struct CopelandScorer;

impl CopelandScorer {
    /// Computes the Copeland score of every alternative.
    ///
    /// # Algorithm
    /// score(A) = |{B != A : judgment(A, B) is Greater or Equal}|
    ///
    /// # Edge Cases
    /// - No alternatives: empty scores and empty winner set
    /// - Missing judgments: contribute neither a point nor a loss, and the
    ///   result carries a warning listing the missing pairs
    /// - Self judgments: never counted
    pub fn score(relation: &PreferenceRelation, alternatives: &[AlternativeId]) -> CopelandResult {
        let mut scores = HashMap::with_capacity(alternatives.len());

        for alt in alternatives {
            let points = alternatives
                .iter()
                .filter(|other| *other != alt)
                .filter(|other| {
                    relation
                        .outcome(*alt, **other)
                        .map(|o| o.is_win_or_tie())
                        .unwrap_or(false)
                })
                .count() as u32;
            scores.insert(*alt, points);
        }

        let winners = Self::winners(&scores, alternatives);

        CopelandResult {
            decision_maker_id: relation.decision_maker_id(),
            scores,
            winners,
            warning: relation.completeness_warning(alternatives),
        }
    }

    /// Alternatives with the maximum score, ties preserved.
    pub fn winners(scores: &HashMap<AlternativeId, u32>, alternatives: &[AlternativeId]) -> Vec<AlternativeId> {
        let Some(max) = scores.values().max().copied() else {
            return Vec::new();
        };
        alternatives
            .iter()
            .filter(|alt| scores.get(*alt) == Some(&max))
            .copied()
            .collect()
    }
}
