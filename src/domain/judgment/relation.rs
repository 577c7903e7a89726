//! Preference relation - one decision maker's pairwise judgments.
//!
//! A judgment and its inverse are always written together through a
//! [`JudgmentPair`], so the stored relation can never hold `(A, B)` without
//! the matching `(B, A)`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Outcome;
use crate::domain::foundation::{AlternativeId, DecisionMakerId, EngineError};

/// One directed entry of a decision maker's relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgment {
    pub decision_maker_id: DecisionMakerId,
    pub first: AlternativeId,
    pub second: AlternativeId,
    pub outcome: Outcome,
}

impl Judgment {
    /// The `(A, A) = Equal` entry seeded at registration time.
    pub fn reflexive(decision_maker_id: DecisionMakerId, alternative: AlternativeId) -> Self {
        Self {
            decision_maker_id,
            first: alternative,
            second: alternative,
            outcome: Outcome::Equal,
        }
    }

    /// Returns true for an `(A, A)` entry.
    pub fn is_reflexive(&self) -> bool {
        self.first == self.second
    }
}

/// A judgment together with its derived inverse.
///
/// The only way to build one is [`JudgmentPair::new`], which computes the
/// inverse itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JudgmentPair {
    forward: Judgment,
    backward: Judgment,
}

impl JudgmentPair {
    /// Builds the pair `(first, second) = outcome`, `(second, first) = inverse`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPair` when `first == second`.
    pub fn new(
        decision_maker_id: DecisionMakerId,
        first: AlternativeId,
        second: AlternativeId,
        outcome: Outcome,
    ) -> Result<Self, EngineError> {
        if first == second {
            return Err(EngineError::invalid_pair(format!(
                "alternative {} cannot be compared with itself",
                first
            )));
        }
        Ok(Self {
            forward: Judgment {
                decision_maker_id,
                first,
                second,
                outcome,
            },
            backward: Judgment {
                decision_maker_id,
                first: second,
                second: first,
                outcome: outcome.inverse(),
            },
        })
    }

    pub fn forward(&self) -> &Judgment {
        &self.forward
    }

    pub fn backward(&self) -> &Judgment {
        &self.backward
    }

    pub fn decision_maker_id(&self) -> DecisionMakerId {
        self.forward.decision_maker_id
    }

    /// Both directed entries, forward first.
    pub fn judgments(&self) -> [Judgment; 2] {
        [self.forward, self.backward]
    }
}

/// An unordered pair of alternatives with no recorded judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingPair {
    pub first: AlternativeId,
    pub second: AlternativeId,
}

/// Non-fatal status reported alongside best-effort results computed from an
/// incomplete relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationWarning {
    pub decision_maker_id: DecisionMakerId,
    pub missing: Vec<MissingPair>,
}

impl RelationWarning {
    /// Converts the warning into the strict-mode error.
    pub fn into_error(self) -> EngineError {
        EngineError::IncompleteRelation {
            missing: self.missing.len(),
        }
    }
}

/// All judgments of one decision maker, keyed by ordered pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceRelation {
    decision_maker_id: DecisionMakerId,
    outcomes: HashMap<(AlternativeId, AlternativeId), Outcome>,
}

impl PreferenceRelation {
    /// Creates an empty relation.
    pub fn new(decision_maker_id: DecisionMakerId) -> Self {
        Self {
            decision_maker_id,
            outcomes: HashMap::new(),
        }
    }

    /// Rebuilds a relation from stored judgments.
    ///
    /// Judgments belonging to other decision makers are skipped.
    pub fn from_judgments<'a>(
        decision_maker_id: DecisionMakerId,
        judgments: impl IntoIterator<Item = &'a Judgment>,
    ) -> Self {
        let outcomes = judgments
            .into_iter()
            .filter(|j| j.decision_maker_id == decision_maker_id)
            .map(|j| ((j.first, j.second), j.outcome))
            .collect();
        Self {
            decision_maker_id,
            outcomes,
        }
    }

    pub fn decision_maker_id(&self) -> DecisionMakerId {
        self.decision_maker_id
    }

    /// Writes both directions of a judgment pair.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPair` when the pair belongs to another decision maker.
    pub fn apply(&mut self, pair: &JudgmentPair) -> Result<(), EngineError> {
        if pair.decision_maker_id() != self.decision_maker_id {
            return Err(EngineError::invalid_pair(format!(
                "judgment of decision maker {} applied to relation of {}",
                pair.decision_maker_id(),
                self.decision_maker_id
            )));
        }
        for judgment in pair.judgments() {
            self.outcomes
                .insert((judgment.first, judgment.second), judgment.outcome);
        }
        Ok(())
    }

    /// Seeds the `(A, A) = Equal` entry.
    pub fn seed_reflexive(&mut self, alternative: AlternativeId) {
        self.outcomes
            .insert((alternative, alternative), Outcome::Equal);
    }

    /// Returns the recorded outcome of `first` against `second`.
    pub fn outcome(&self, first: AlternativeId, second: AlternativeId) -> Option<Outcome> {
        self.outcomes.get(&(first, second)).copied()
    }

    /// Number of directed entries, reflexive ones included.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Unordered non-self pairs without a judgment, in alternative order.
    pub fn missing_pairs(&self, alternatives: &[AlternativeId]) -> Vec<MissingPair> {
        let mut missing = Vec::new();
        for (i, first) in alternatives.iter().enumerate() {
            for second in &alternatives[i + 1..] {
                if self.outcome(*first, *second).is_none() {
                    missing.push(MissingPair {
                        first: *first,
                        second: *second,
                    });
                }
            }
        }
        missing
    }

    /// Complete iff every unordered non-self pair has a judgment.
    pub fn is_complete(&self, alternatives: &[AlternativeId]) -> bool {
        self.missing_pairs(alternatives).is_empty()
    }

    /// Returns a warning when the relation is incomplete over `alternatives`.
    pub fn completeness_warning(&self, alternatives: &[AlternativeId]) -> Option<RelationWarning> {
        let missing = self.missing_pairs(alternatives);
        if missing.is_empty() {
            None
        } else {
            Some(RelationWarning {
                decision_maker_id: self.decision_maker_id,
                missing,
            })
        }
    }

    /// Drops every entry naming the alternative.
    pub fn remove_alternative(&mut self, alternative: AlternativeId) {
        self.outcomes
            .retain(|(first, second), _| *first != alternative && *second != alternative);
    }

    /// All stored entries as judgments, in no particular order.
    pub fn judgments(&self) -> Vec<Judgment> {
        self.outcomes
            .iter()
            .map(|((first, second), outcome)| Judgment {
                decision_maker_id: self.decision_maker_id,
                first: *first,
                second: *second,
                outcome: *outcome,
            })
            .collect()
    }
}
