//! Judgment command and query handlers.

mod record_judgment;
mod record_judgments;
mod suggest_comparison;

pub use record_judgment::{RecordJudgmentCommand, RecordJudgmentHandler};
pub use record_judgments::{JudgmentInput, RecordJudgmentsCommand, RecordJudgmentsHandler};
pub use suggest_comparison::{SuggestComparisonHandler, SuggestComparisonQuery};
