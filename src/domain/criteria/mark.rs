//! Mark - a raw value on a criterion scale plus its normalized equivalent.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CriterionId, MarkId, Percentage};

/// A point on one criterion's scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    pub id: MarkId,
    pub criterion_id: CriterionId,
    pub name: String,
    #[serde(default)]
    pub rank: i32,
    pub numeric_value: i64,
    /// Filled in by normalization; `None` until the criterion has been normalized.
    #[serde(default)]
    pub normalized: Option<Percentage>,
}

impl Mark {
    /// Creates a new, not yet normalized mark.
    pub fn new(criterion_id: CriterionId, name: impl Into<String>, numeric_value: i64) -> Self {
        Self {
            id: MarkId::new(),
            criterion_id,
            name: name.into(),
            rank: 0,
            numeric_value,
            normalized: None,
        }
    }

    /// Returns true once a normalized value has been computed.
    pub fn is_normalized(&self) -> bool {
        self.normalized.is_some()
    }
}
