//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations over the
//! repository ports. Commands take a `CommandMetadata` for log and event
//! correlation; queries do not.

pub mod alternatives;
pub mod analysis;
pub mod criteria;
pub mod judgment;
pub mod panel;

#[cfg(test)]
mod test_support;

pub use alternatives::{
    AssignProfileCommand, AssignProfileHandler, RegisterAlternativeCommand,
    RegisterAlternativeHandler, RemoveAlternativeCommand, RemoveAlternativeHandler,
};
pub use analysis::{
    AnalyzeDominanceCommand, AnalyzeDominanceHandler, GroupRankingHandler,
    ScoreDecisionMakerCommand, ScoreDecisionMakerHandler,
};
pub use criteria::{
    AddMarkCommand, AddMarkHandler, NormalizeCriterionCommand, NormalizeCriterionHandler,
    RankCriteriaCommand, RankCriteriaHandler, RegisterCriterionCommand, RegisterCriterionHandler,
    RemoveCriterionCommand, RemoveCriterionHandler, SetDirectionCommand, SetDirectionHandler,
    UpdateMarkCommand, UpdateMarkHandler, UpdateMarkResult,
};
pub use judgment::{
    JudgmentInput, RecordJudgmentCommand, RecordJudgmentHandler, RecordJudgmentsCommand,
    RecordJudgmentsHandler, SuggestComparisonHandler, SuggestComparisonQuery,
};
pub use panel::{
    AggregatePrioritiesHandler, RecordPeerComparisonCommand, RecordPeerComparisonHandler,
    RegisterDecisionMakerCommand, RegisterDecisionMakerHandler, RemoveDecisionMakerCommand,
    RemoveDecisionMakerHandler,
};
