//! Judgment module - pairwise preference judgments between alternatives.
//!
//! Each decision maker owns one [`PreferenceRelation`]. Writes go through
//! [`JudgmentPair`], which carries the inverse alongside the judgment.

mod comparator;
mod events;
mod outcome;
mod relation;

pub use comparator::{ComparisonView, CriterionComparison, PairwiseComparator};
pub use events::JudgmentRecorded;
pub use outcome::Outcome;
pub use relation::{Judgment, JudgmentPair, MissingPair, PreferenceRelation, RelationWarning};
