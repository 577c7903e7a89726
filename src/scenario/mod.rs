//! Scenario evaluation.
//!
//! A scenario is a JSON document describing a whole decision problem by
//! name. `ScenarioRunner` drives it through the application handlers over
//! in-memory adapters and produces a `Report`.

mod error;
mod model;
mod report;
mod runner;

pub use error::ScenarioError;
pub use model::{
    AlternativeDef, CriterionDef, JudgmentDef, MarkDef, PeerComparisonDef, Scenario,
};
pub use report::{
    CriterionReport, DecisionMakerReport, MarkReport, RankingEntry, Report, ScoreEntry,
};
pub use runner::ScenarioRunner;
