//! Dominance Analyzer - non-dominated alternatives via a signed incidence matrix.
//!
//! This is a structural characterization of "best" that is independent of
//! Copeland counting. On cyclic preferences the two disagree, and callers
//! receive both.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AlternativeId, DecisionMakerId};
use crate::domain::judgment::{Outcome, PreferenceRelation, RelationWarning};

/// A directed edge `tail -> head`, meaning tail is preferred to head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub tail: AlternativeId,
    pub head: AlternativeId,
    /// One half of an `Equal` judgment. Mutual edges never dominate.
    pub mutual: bool,
}

/// Preference graph of one decision maker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceGraph {
    pub nodes: Vec<AlternativeId>,
    pub edges: Vec<Edge>,
}

impl PreferenceGraph {
    /// Builds the graph from each unordered pair's judgment.
    ///
    /// Greater gives `A -> B`, Less gives `B -> A`, Equal gives both as
    /// mutual edges. Unjudged pairs and self pairs give no edge.
    pub fn build(relation: &PreferenceRelation, alternatives: &[AlternativeId]) -> Self {
        let mut edges = Vec::new();
        for (i, a) in alternatives.iter().enumerate() {
            for b in &alternatives[i + 1..] {
                if a == b {
                    continue;
                }
                match relation.outcome(*a, *b) {
                    Some(Outcome::Greater) => edges.push(Edge { tail: *a, head: *b, mutual: false }),
                    Some(Outcome::Less) => edges.push(Edge { tail: *b, head: *a, mutual: false }),
                    Some(Outcome::Equal) => {
                        edges.push(Edge { tail: *a, head: *b, mutual: true });
                        edges.push(Edge { tail: *b, head: *a, mutual: true });
                    }
                    None => {}
                }
            }
        }
        Self {
            nodes: alternatives.to_vec(),
            edges,
        }
    }

    /// Edges that express a strict preference.
    pub fn strict_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| !e.mutual)
    }
}

/// Node-by-edge matrix: +1 where the node is an edge's tail, -1 where it is
/// the head, 0 otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidenceMatrix {
    pub nodes: Vec<AlternativeId>,
    pub edges: Vec<Edge>,
    pub rows: Vec<Vec<i8>>,
}

impl IncidenceMatrix {
    /// Builds the signed incidence matrix of a graph.
    pub fn from_graph(graph: &PreferenceGraph) -> Self {
        let rows = graph
            .nodes
            .iter()
            .map(|node| {
                graph
                    .edges
                    .iter()
                    .map(|edge| {
                        if edge.tail == *node {
                            1
                        } else if edge.head == *node {
                            -1
                        } else {
                            0
                        }
                    })
                    .collect()
            })
            .collect();
        Self {
            nodes: graph.nodes.clone(),
            edges: graph.edges.clone(),
            rows,
        }
    }

    /// Returns true when the node's row holds a -1 on some strict edge.
    pub fn is_dominated(&self, node: usize) -> bool {
        self.rows
            .get(node)
            .map(|row| {
                row.iter()
                    .zip(&self.edges)
                    .any(|(sign, edge)| *sign == -1 && !edge.mutual)
            })
            .unwrap_or(false)
    }

    /// Nodes never at the head of a strict edge, in node order.
    pub fn non_dominated(&self) -> Vec<AlternativeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.is_dominated(*i))
            .map(|(_, id)| *id)
            .collect()
    }
}

/// Dominance analysis output for one decision maker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominanceResult {
    pub decision_maker_id: DecisionMakerId,
    pub non_dominated: Vec<AlternativeId>,
    pub matrix: IncidenceMatrix,
    pub warning: Option<RelationWarning>,
}

/// Graph dominance functions.
pub struct DominanceAnalyzer;

impl DominanceAnalyzer {
    /// Finds the alternatives no other alternative strictly beats.
    ///
    /// # Edge Cases
    /// - Incomplete relation: sparser graph, possibly larger set, plus a warning
    /// - Cyclic relation: every node is dominated, so the set is empty
    /// - All Equal: every node is non-dominated
    pub fn analyze(relation: &PreferenceRelation, alternatives: &[AlternativeId]) -> DominanceResult {
        let graph = PreferenceGraph::build(relation, alternatives);
        let matrix = IncidenceMatrix::from_graph(&graph);

        DominanceResult {
            decision_maker_id: relation.decision_maker_id(),
            non_dominated: matrix.non_dominated(),
            matrix,
            warning: relation.completeness_warning(alternatives),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::CopelandScorer;
    use crate::domain::judgment::JudgmentPair;

    fn relation_with(
        alts: &[AlternativeId],
        judgments: &[(usize, usize, Outcome)],
    ) -> PreferenceRelation {
        let dm = DecisionMakerId::new();
        let mut relation = PreferenceRelation::new(dm);
        for alt in alts {
            relation.seed_reflexive(*alt);
        }
        for (a, b, outcome) in judgments {
            relation
                .apply(&JudgmentPair::new(dm, alts[*a], alts[*b], *outcome).unwrap())
                .unwrap();
        }
        relation
    }

    fn alts(n: usize) -> Vec<AlternativeId> {
        (0..n).map(|_| AlternativeId::new()).collect()
    }

    // Graph Construction Tests

    #[test]
    fn greater_and_less_orient_edges() {
        let ids = alts(2);
        let relation = relation_with(&ids, &[(0, 1, Outcome::Less)]);

        let graph = PreferenceGraph::build(&relation, &ids);
        assert_eq!(graph.edges, vec![Edge { tail: ids[1], head: ids[0], mutual: false }]);
    }

    #[test]
    fn equal_gives_two_mutual_edges() {
        let ids = alts(2);
        let relation = relation_with(&ids, &[(0, 1, Outcome::Equal)]);

        let graph = PreferenceGraph::build(&relation, &ids);
        assert_eq!(graph.edges.len(), 2);
        assert!(graph.edges.iter().all(|e| e.mutual));
        assert_eq!(graph.strict_edges().count(), 0);
    }

    #[test]
    fn reflexive_seeds_give_no_edges() {
        let ids = alts(3);
        let relation = relation_with(&ids, &[]);
        let graph = PreferenceGraph::build(&relation, &ids);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn incidence_rows_mark_tail_and_head() {
        let ids = alts(3);
        let relation = relation_with(&ids, &[(0, 1, Outcome::Greater)]);

        let matrix = IncidenceMatrix::from_graph(&PreferenceGraph::build(&relation, &ids));
        assert_eq!(matrix.rows, vec![vec![1], vec![-1], vec![0]]);
    }

    // Non-Dominated Set Tests

    #[test]
    fn transitive_relation_has_single_non_dominated() {
        let ids = alts(3);
        let relation = relation_with(
            &ids,
            &[
                (0, 1, Outcome::Greater),
                (1, 2, Outcome::Greater),
                (0, 2, Outcome::Greater),
            ],
        );

        let result = DominanceAnalyzer::analyze(&relation, &ids);
        assert_eq!(result.non_dominated, vec![ids[0]]);
        assert!(result.warning.is_none());
    }

    #[test]
    fn cyclic_relation_diverges_from_copeland_winners() {
        let ids = alts(3);
        let relation = relation_with(
            &ids,
            &[
                (0, 1, Outcome::Greater),
                (1, 2, Outcome::Greater),
                (2, 0, Outcome::Greater),
            ],
        );

        let dominance = DominanceAnalyzer::analyze(&relation, &ids);
        let copeland = CopelandScorer::score(&relation, &ids);

        assert!(dominance.non_dominated.is_empty());
        assert_eq!(copeland.winners.len(), 3);
        assert_ne!(dominance.non_dominated, copeland.winners);
    }

    #[test]
    fn equal_alternatives_are_both_non_dominated() {
        let ids = alts(3);
        let relation = relation_with(
            &ids,
            &[
                (0, 1, Outcome::Equal),
                (0, 2, Outcome::Greater),
                (1, 2, Outcome::Greater),
            ],
        );

        let result = DominanceAnalyzer::analyze(&relation, &ids);
        assert_eq!(result.non_dominated, vec![ids[0], ids[1]]);
    }

    #[test]
    fn incomplete_relation_widens_set_and_warns() {
        let ids = alts(3);
        let relation = relation_with(&ids, &[(0, 1, Outcome::Greater)]);

        let result = DominanceAnalyzer::analyze(&relation, &ids);
        assert_eq!(result.non_dominated, vec![ids[0], ids[2]]);
        assert_eq!(result.warning.map(|w| w.missing.len()), Some(2));
    }

    #[test]
    fn empty_relation_leaves_everyone_non_dominated() {
        let ids = alts(2);
        let relation = PreferenceRelation::new(DecisionMakerId::new());
        let result = DominanceAnalyzer::analyze(&relation, &ids);
        assert_eq!(result.non_dominated, ids);
    }
}
