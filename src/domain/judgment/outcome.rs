//! Outcome of a pairwise comparison between two alternatives.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Ternary preference outcome, read as "first <outcome> second".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "=")]
    Equal,
}

impl Outcome {
    /// The outcome seen from the other side of the pair.
    pub fn inverse(self) -> Self {
        match self {
            Outcome::Greater => Outcome::Less,
            Outcome::Less => Outcome::Greater,
            Outcome::Equal => Outcome::Equal,
        }
    }

    /// Whether this outcome earns the first alternative a Copeland point.
    pub fn is_win_or_tie(self) -> bool {
        matches!(self, Outcome::Greater | Outcome::Equal)
    }

    /// Returns the comparison symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Outcome::Greater => ">",
            Outcome::Less => "<",
            Outcome::Equal => "=",
        }
    }

    /// Parses a comparison symbol.
    pub fn from_symbol(symbol: &str) -> Result<Self, ValidationError> {
        match symbol.trim() {
            ">" => Ok(Outcome::Greater),
            "<" => Ok(Outcome::Less),
            "=" => Ok(Outcome::Equal),
            other => Err(ValidationError::invalid_format(
                "outcome",
                format!("expected one of >, <, =, got '{}'", other),
            )),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
