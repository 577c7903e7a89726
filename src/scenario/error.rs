//! Scenario error types

use thiserror::Error;

use crate::domain::foundation::EngineError;

/// Errors raised while loading or evaluating a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown {kind} '{name}'")]
    UnknownName { kind: &'static str, name: String },

    #[error("Duplicate {kind} '{name}'")]
    DuplicateName { kind: &'static str, name: String },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl ScenarioError {
    pub(crate) fn unknown(kind: &'static str, name: impl Into<String>) -> Self {
        ScenarioError::UnknownName {
            kind,
            name: name.into(),
        }
    }
}
