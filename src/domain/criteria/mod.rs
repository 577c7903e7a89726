//! Criteria module - criteria, their marks, and scale normalization.

mod criterion;
mod events;
mod mark;
mod normalizer;

pub use criterion::{Criterion, CriterionKind, Direction};
pub use events::CriterionNormalized;
pub use mark::Mark;
pub use normalizer::{NormalizedMark, Normalizer, NORMALIZED_SCALE};
