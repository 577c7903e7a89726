//! Consensus Engine - multi-criteria group decision support
//!
//! Normalizes criterion marks, records pairwise judgments per decision
//! maker, ranks alternatives by Copeland score and by graph dominance, and
//! weights decision makers by propagated peer comparisons.
//!
//! Layout follows ports and adapters: `domain` holds the pure computations,
//! `ports` the repository and event traits, `adapters` the in-memory
//! implementations, `application` the command and query handlers, and
//! `scenario` a document-driven runner over all of them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod scenario;
