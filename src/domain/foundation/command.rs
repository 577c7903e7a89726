//! Command infrastructure for application handlers.
//!
//! Every handler accepts a `CommandMetadata` next to its command and copies
//! the correlation id onto the events it publishes, so all events caused by
//! one request (or one scenario run) can be grouped.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata context for command handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Links related operations. Generated when not supplied.
    correlation_id: String,

    /// Source of this command (e.g., "cli", "test").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates metadata with a fresh correlation id.
    pub fn new() -> Self {
        Self {
            correlation_id: Uuid::new_v4().to_string(),
            source: None,
        }
    }

    /// Builder: Replace the correlation id.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = id.into();
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl Default for CommandMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl CommandMetadata {
    /// Fixed metadata for handler tests.
    pub fn test_fixture() -> Self {
        Self::new()
            .with_correlation_id("test-correlation-id")
            .with_source("test")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_correlation_id() {
        let metadata = CommandMetadata::new();
        assert!(!metadata.correlation_id().is_empty());
        assert!(metadata.source().is_none());
    }

    #[test]
    fn correlation_id_is_stable() {
        let metadata = CommandMetadata::new();
        assert_eq!(metadata.correlation_id(), metadata.correlation_id());
    }

    #[test]
    fn builder_chain_sets_fields() {
        let metadata = CommandMetadata::new()
            .with_correlation_id("corr-123")
            .with_source("cli");

        assert_eq!(metadata.correlation_id(), "corr-123");
        assert_eq!(metadata.source(), Some("cli"));
    }
}
