//! Analysis Module - Pure domain services over preference relations.
//!
//! # Components
//!
//! - `CopelandScorer` - win/tie counts and the winner set
//! - `DominanceAnalyzer` - non-dominated set from a signed incidence matrix
//! - `GroupRanking` - priority-weighted combination of Copeland scores
//!
//! All functions are pure and stateless. The two characterizations of the
//! best alternatives are kept separate because they can disagree on cyclic
//! preferences; callers see both.

mod copeland;
mod dominance;
mod events;
mod group_ranking;

pub use copeland::{AggregatedResult, CopelandResult, CopelandScorer};
pub use dominance::{DominanceAnalyzer, DominanceResult, Edge, IncidenceMatrix, PreferenceGraph};
pub use events::{CopelandScoresComputed, DominanceAnalyzed};
pub use group_ranking::{GroupRanking, RankedAlternative};
