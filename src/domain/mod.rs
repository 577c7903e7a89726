//! Domain layer containing the decision-aggregation engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, errors, events, percentage)
//! - `criteria` - Criteria, marks, and scale normalization
//! - `alternatives` - Alternatives and their mark profiles
//! - `judgment` - Pairwise preference judgments per decision maker
//! - `analysis` - Copeland scoring, graph dominance, group ranking
//! - `panel` - Decision makers and priority aggregation

pub mod alternatives;
pub mod analysis;
pub mod criteria;
pub mod foundation;
pub mod judgment;
pub mod panel;
