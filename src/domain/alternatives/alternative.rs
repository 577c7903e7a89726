//! Alternative - one of the options being ranked.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AlternativeId, ValidationError};

/// An option under consideration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: AlternativeId,
    pub name: String,
}

impl Alternative {
    /// Creates a new alternative, rejecting a blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: AlternativeId::new(),
            name,
        })
    }
}
