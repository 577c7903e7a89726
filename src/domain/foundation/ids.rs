//! Identifiers for the engine's entities.
//!
//! Each is a random v4 UUID behind its own newtype, so an alternative id
//! can never be passed where a criterion id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for an alternative being ranked.
    AlternativeId
);

uuid_id!(
    /// Unique identifier for an evaluation criterion.
    CriterionId
);

uuid_id!(
    /// Unique identifier for a mark on a criterion scale.
    MarkId
);

uuid_id!(
    /// Unique identifier for a decision maker.
    DecisionMakerId
);
