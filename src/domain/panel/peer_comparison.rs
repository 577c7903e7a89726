//! Peer comparisons - directed scores between decision makers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{DecisionMakerId, ValidationError};

/// Score given by `master` to `target`. Directed and not required to be
/// symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerComparison {
    pub master: DecisionMakerId,
    pub target: DecisionMakerId,
    pub score: i64,
}

impl PeerComparison {
    /// The self comparison fixed at registration time.
    pub fn reflexive(decision_maker_id: DecisionMakerId) -> Self {
        Self {
            master: decision_maker_id,
            target: decision_maker_id,
            score: 1,
        }
    }
}

/// Square matrix `C` where `C[j][i]` is the score decision maker `j` gave
/// decision maker `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    decision_makers: Vec<DecisionMakerId>,
    cells: Vec<Vec<i64>>,
}

impl ComparisonMatrix {
    /// Builds the matrix over `decision_makers`, in that order.
    ///
    /// Missing comparisons are 0. Comparisons naming anyone outside the
    /// list are ignored.
    pub fn from_comparisons(
        decision_makers: &[DecisionMakerId],
        comparisons: &[PeerComparison],
    ) -> Self {
        let index: HashMap<DecisionMakerId, usize> = decision_makers
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, i))
            .collect();
        let n = decision_makers.len();
        let mut cells = vec![vec![0; n]; n];
        for comparison in comparisons {
            if let (Some(&j), Some(&i)) = (index.get(&comparison.master), index.get(&comparison.target)) {
                cells[j][i] = comparison.score;
            }
        }
        Self {
            decision_makers: decision_makers.to_vec(),
            cells,
        }
    }

    /// Builds the matrix from literal rows.
    pub fn from_rows(
        decision_makers: &[DecisionMakerId],
        rows: Vec<Vec<i64>>,
    ) -> Result<Self, ValidationError> {
        let n = decision_makers.len();
        if rows.len() != n {
            return Err(ValidationError::out_of_range("rows", n as i64, n as i64, rows.len() as i64));
        }
        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(ValidationError::out_of_range("columns", n as i64, n as i64, row.len() as i64));
        }
        Ok(Self {
            decision_makers: decision_makers.to_vec(),
            cells: rows,
        })
    }

    pub fn decision_makers(&self) -> &[DecisionMakerId] {
        &self.decision_makers
    }

    pub fn len(&self) -> usize {
        self.decision_makers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decision_makers.is_empty()
    }

    /// Score decision maker `master` gave `target`, by matrix index.
    pub fn get(&self, master: usize, target: usize) -> i64 {
        self.cells
            .get(master)
            .and_then(|row| row.get(target))
            .copied()
            .unwrap_or(0)
    }
}
