//! Criterion - an axis of evaluation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CriterionId, ValidationError};

/// Whether a criterion is judged on a qualitative or quantitative scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    Qualitative,
    Quantitative,
}

/// Which end of the scale is optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Maximize,
    Minimize,
}

impl Direction {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Maximize => "Maximum",
            Direction::Minimize => "Minimum",
        }
    }
}

/// An evaluation criterion.
///
/// The direction is optional while the criterion is being set up, but marks
/// under it cannot be normalized until one is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: String,
    pub weight: i32,
    pub kind: CriterionKind,
    pub direction: Option<Direction>,
    /// Measurement unit (e.g. "USD", "km").
    pub measure: String,
    /// Free-form description of the scale.
    pub scale: String,
    /// Optional display position.
    #[serde(default)]
    pub rank: Option<i32>,
}

impl Criterion {
    /// Creates a new criterion without a direction.
    pub fn new(
        name: impl Into<String>,
        weight: i32,
        kind: CriterionKind,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: CriterionId::new(),
            name,
            weight,
            kind,
            direction: None,
            measure: String::new(),
            scale: String::new(),
            rank: None,
        })
    }

    /// Sets the optimal direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Sets the measurement unit and scale descriptor.
    pub fn with_measure(mut self, measure: impl Into<String>, scale: impl Into<String>) -> Self {
        self.measure = measure.into();
        self.scale = scale.into();
        self
    }
}
