//! Evaluation report, with every id resolved back to its name.

use serde::Serialize;

use crate::domain::criteria::Direction;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Report {
    pub criteria: Vec<CriterionReport>,
    pub decision_makers: Vec<DecisionMakerReport>,
    /// Set when priority aggregation failed; every priority is then absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_error: Option<String>,
    pub group_ranking: Vec<RankingEntry>,
    pub events_published: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CriterionReport {
    pub name: String,
    pub weight: i32,
    pub direction: Option<Direction>,
    pub marks: Vec<MarkReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalization_error: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MarkReport {
    pub name: String,
    pub value: i64,
    pub normalized: Option<u8>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DecisionMakerReport {
    pub name: String,
    pub priority: Option<i64>,
    pub copeland: Vec<ScoreEntry>,
    pub winners: Vec<String>,
    pub non_dominated: Vec<String>,
    /// Unordered pairs without a judgment.
    pub missing_pairs: Vec<(String, String)>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScoreEntry {
    pub alternative: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RankingEntry {
    pub alternative: String,
    pub score: i64,
    pub position: usize,
}
