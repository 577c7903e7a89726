//! Analysis command and query handlers.

mod analyze_dominance;
mod group_ranking;
mod score_decision_maker;

pub use analyze_dominance::{AnalyzeDominanceCommand, AnalyzeDominanceHandler};
pub use group_ranking::GroupRankingHandler;
pub use score_decision_maker::{ScoreDecisionMakerCommand, ScoreDecisionMakerHandler};
