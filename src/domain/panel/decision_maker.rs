//! Decision maker - a participant whose judgments are aggregated.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DecisionMakerId, ValidationError};

/// A member of the decision panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionMaker {
    pub id: DecisionMakerId,
    pub name: String,
    /// Relative influence, `None` until priorities have been aggregated.
    #[serde(default)]
    pub priority: Option<i64>,
}

impl DecisionMaker {
    /// Creates a decision maker without a priority.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: DecisionMakerId::new(),
            name,
            priority: None,
        })
    }
}
