//! Scenario input document.
//!
//! Everything is referenced by name; the runner assigns ids.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use super::ScenarioError;
use crate::domain::criteria::{CriterionKind, Direction};
use crate::domain::judgment::Outcome;

/// A complete decision problem.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub criteria: Vec<CriterionDef>,
    #[serde(default)]
    pub alternatives: Vec<AlternativeDef>,
    #[serde(default)]
    pub decision_makers: Vec<String>,
    #[serde(default)]
    pub judgments: Vec<JudgmentDef>,
    #[serde(default)]
    pub peer_comparisons: Vec<PeerComparisonDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CriterionDef {
    pub name: String,
    #[serde(default = "default_weight")]
    pub weight: i32,
    #[serde(default = "default_kind")]
    pub kind: CriterionKind,
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(default)]
    pub measure: String,
    #[serde(default)]
    pub scale: String,
    #[serde(default)]
    pub marks: Vec<MarkDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkDef {
    pub name: String,
    pub value: i64,
    #[serde(default)]
    pub rank: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlternativeDef {
    pub name: String,
    /// Criterion name -> mark name.
    #[serde(default)]
    pub profile: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JudgmentDef {
    pub decision_maker: String,
    pub first: String,
    pub second: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeerComparisonDef {
    pub master: String,
    pub target: String,
    pub score: i64,
}

impl Scenario {
    /// Parses a scenario from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a scenario file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

fn default_weight() -> i32 {
    1
}

fn default_kind() -> CriterionKind {
    CriterionKind::Quantitative
}
