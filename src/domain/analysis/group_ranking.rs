//! Group Ranking - priority-weighted sum of per-decision-maker Copeland scores.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::AggregatedResult;
use crate::domain::foundation::{AlternativeId, DecisionMakerId, EngineError};

/// One alternative's place in the group ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub alternative_id: AlternativeId,
    pub score: i64,
    /// 1-based; tied alternatives share a position.
    pub position: usize,
}

/// Group ranking functions.
pub struct GroupRanking;

impl GroupRanking {
    /// Combines decision-maker priorities with their Copeland scores.
    ///
    /// # Algorithm
    /// group(A) = Σ_dm copeland(dm, A) * priority(dm)
    ///
    /// Sorted by score descending; equal scores share a position and keep
    /// input order, the next position skips ahead (1, 1, 3).
    ///
    /// # Edge Cases
    /// - Decision maker without a priority: contributes 0
    /// - Alternative without results: score 0
    /// - Results for alternatives outside `alternatives`: ignored
    pub fn combine(
        alternatives: &[AlternativeId],
        priorities: &HashMap<DecisionMakerId, i64>,
        results: &[AggregatedResult],
    ) -> Result<Vec<RankedAlternative>, EngineError> {
        let mut totals: HashMap<AlternativeId, i64> =
            alternatives.iter().map(|alt| (*alt, 0)).collect();

        for result in results {
            let Some(total) = totals.get_mut(&result.alternative_id) else {
                continue;
            };
            let priority = priorities
                .get(&result.decision_maker_id)
                .copied()
                .unwrap_or(0);
            let contribution = i64::from(result.weight)
                .checked_mul(priority)
                .ok_or(EngineError::Overflow("group ranking"))?;
            *total = total
                .checked_add(contribution)
                .ok_or(EngineError::Overflow("group ranking"))?;
        }

        let mut scored: Vec<(AlternativeId, i64)> = alternatives
            .iter()
            .map(|alt| (*alt, totals.get(alt).copied().unwrap_or(0)))
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let mut ranking = Vec::with_capacity(scored.len());
        let mut position = 0;
        let mut previous: Option<i64> = None;
        for (index, (alternative_id, score)) in scored.into_iter().enumerate() {
            if previous != Some(score) {
                position = index + 1;
                previous = Some(score);
            }
            ranking.push(RankedAlternative {
                alternative_id,
                score,
                position,
            });
        }

        Ok(ranking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(dm: DecisionMakerId, alt: AlternativeId, weight: u32) -> AggregatedResult {
        AggregatedResult {
            decision_maker_id: dm,
            alternative_id: alt,
            weight,
        }
    }

    #[test]
    fn weights_scores_by_priority() {
        let alts: Vec<AlternativeId> = (0..2).map(|_| AlternativeId::new()).collect();
        let dm1 = DecisionMakerId::new();
        let dm2 = DecisionMakerId::new();
        let priorities = HashMap::from([(dm1, 37), (dm2, 63)]);
        let results = vec![
            result(dm1, alts[0], 1),
            result(dm1, alts[1], 0),
            result(dm2, alts[0], 0),
            result(dm2, alts[1], 1),
        ];

        let ranking = GroupRanking::combine(&alts, &priorities, &results).unwrap();
        assert_eq!(ranking[0].alternative_id, alts[1]);
        assert_eq!(ranking[0].score, 63);
        assert_eq!(ranking[0].position, 1);
        assert_eq!(ranking[1].alternative_id, alts[0]);
        assert_eq!(ranking[1].score, 37);
        assert_eq!(ranking[1].position, 2);
    }

    #[test]
    fn ties_share_a_position() {
        let alts: Vec<AlternativeId> = (0..3).map(|_| AlternativeId::new()).collect();
        let dm = DecisionMakerId::new();
        let priorities = HashMap::from([(dm, 50)]);
        let results = vec![
            result(dm, alts[0], 1),
            result(dm, alts[1], 1),
            result(dm, alts[2], 0),
        ];

        let ranking = GroupRanking::combine(&alts, &priorities, &results).unwrap();
        let positions: Vec<usize> = ranking.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 1, 3]);
        assert_eq!(ranking[0].alternative_id, alts[0]);
        assert_eq!(ranking[1].alternative_id, alts[1]);
    }

    #[test]
    fn decision_maker_without_priority_contributes_nothing() {
        let alts = vec![AlternativeId::new()];
        let dm = DecisionMakerId::new();
        let ranking =
            GroupRanking::combine(&alts, &HashMap::new(), &[result(dm, alts[0], 2)]).unwrap();
        assert_eq!(ranking[0].score, 0);
    }

    #[test]
    fn overflow_is_reported() {
        let alts = vec![AlternativeId::new()];
        let dm = DecisionMakerId::new();
        let priorities = HashMap::from([(dm, i64::MAX)]);
        let err = GroupRanking::combine(&alts, &priorities, &[result(dm, alts[0], 2)]).unwrap_err();
        assert!(matches!(err, EngineError::Overflow(_)));
    }
}
