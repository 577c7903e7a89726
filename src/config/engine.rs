//! Engine behaviour configuration

use serde::Deserialize;

/// Engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Fail Copeland scoring with `IncompleteRelation` instead of returning
    /// a warning when some pairs have no judgment
    #[serde(default)]
    pub strict_completeness: bool,
}
