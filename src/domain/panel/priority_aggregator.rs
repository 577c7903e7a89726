//! Priority Aggregator - decision-maker weights by fixed-step propagation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ComparisonMatrix;
use crate::domain::foundation::{DecisionMakerId, EngineError};

/// Number of propagation steps. Fixed; this is not a convergence loop.
pub const PROPAGATION_STEPS: usize = 5;

/// Normalized priority of one decision maker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionMakerPriority {
    pub decision_maker_id: DecisionMakerId,
    pub priority: i64,
}

/// Priority aggregation functions.
pub struct PriorityAggregator;

impl PriorityAggregator {
    /// Computes every decision maker's priority on a 0-100 scale.
    ///
    /// # Algorithm
    /// 1. Seed: t[i] = Σ_j C[j][i]
    /// 2. Repeat PROPAGATION_STEPS times: t[i] = Σ_j t[j] * C[j][i]
    /// 3. priority[i] = round(t[i] / Σ_k t[k] * 100)
    ///
    /// # Edge Cases
    /// - Missing comparisons: 0 in the seed and every step
    /// - Σ t <= 0 or any t[i] < 0 after propagation: `UndefinedPriority`,
    ///   since no such vector maps into 0..=100
    /// - i64 overflow while propagating: `Overflow`
    ///
    /// Output is in matrix order.
    pub fn aggregate(matrix: &ComparisonMatrix) -> Result<Vec<DecisionMakerPriority>, EngineError> {
        let mut scores = Self::seed(matrix)?;
        for _ in 0..PROPAGATION_STEPS {
            scores = Self::propagate_step(matrix, &scores)?;
        }

        let total = scores
            .iter()
            .try_fold(0i64, |acc, s| acc.checked_add(*s))
            .ok_or(EngineError::Overflow("priority normalization"))?;
        if total <= 0 || scores.iter().any(|s| *s < 0) {
            return Err(EngineError::UndefinedPriority);
        }

        Ok(matrix
            .decision_makers()
            .iter()
            .zip(&scores)
            .map(|(id, score)| DecisionMakerPriority {
                decision_maker_id: *id,
                priority: (*score as f64 / total as f64 * 100.0).round() as i64,
            })
            .collect())
    }

    /// Column sums of the matrix.
    pub fn seed(matrix: &ComparisonMatrix) -> Result<Vec<i64>, EngineError> {
        let n = matrix.len();
        (0..n)
            .map(|i| {
                (0..n)
                    .try_fold(0i64, |acc, j| acc.checked_add(matrix.get(j, i)))
                    .ok_or(EngineError::Overflow("priority seed"))
            })
            .collect()
    }

    /// One propagation step: next[i] = Σ_j t[j] * C[j][i].
    pub fn propagate_step(matrix: &ComparisonMatrix, scores: &[i64]) -> Result<Vec<i64>, EngineError> {
        let n = matrix.len();
        (0..n)
            .map(|i| {
                (0..n)
                    .try_fold(0i64, |acc, j| {
                        let t = scores.get(j).copied().unwrap_or(0);
                        t.checked_mul(matrix.get(j, i))
                            .and_then(|term| acc.checked_add(term))
                    })
                    .ok_or(EngineError::Overflow("priority propagation"))
            })
            .collect()
    }

    /// Priorities keyed by decision maker.
    pub fn as_map(priorities: &[DecisionMakerPriority]) -> HashMap<DecisionMakerId, i64> {
        priorities
            .iter()
            .map(|p| (p.decision_maker_id, p.priority))
            .collect()
    }
}
