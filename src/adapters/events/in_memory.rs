//! In-memory event bus.
//!
//! Keeps every published envelope in publish order. The scenario runner
//! counts them for its report and tests assert on them directly.

use async_trait::async_trait;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Event log backed by a vector.
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// handler.handle(cmd, metadata).await?;
/// assert!(bus.has_event("judgment.recorded.v1"));
/// ```
#[derive(Default)]
pub struct InMemoryEventBus {
    log: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> RwLockReadGuard<'_, Vec<EventEnvelope>> {
        self.log.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the log in publish order.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.entries().clone()
    }

    /// Envelopes whose type matches exactly, in publish order.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.entries()
            .iter()
            .filter(|envelope| envelope.event_type == event_type)
            .cloned()
            .collect()
    }

    /// Envelopes raised under one correlation id.
    pub fn events_correlated_with(&self, correlation_id: &str) -> Vec<EventEnvelope> {
        self.entries()
            .iter()
            .filter(|envelope| envelope.correlation_id() == Some(correlation_id))
            .cloned()
            .collect()
    }

    pub fn event_count(&self) -> usize {
        self.entries().len()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.entries().iter().any(|envelope| envelope.event_type == event_type)
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.log
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        self.log
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(events);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(event_type: &str) -> EventEnvelope {
        EventEnvelope::new(event_type, "dm-1", "DecisionMaker", json!({}))
    }

    #[tokio::test]
    async fn publish_appends_to_log() {
        let bus = InMemoryEventBus::new();
        bus.publish(envelope("judgment.recorded.v1")).await.unwrap();

        assert_eq!(bus.event_count(), 1);
        assert!(bus.has_event("judgment.recorded.v1"));
        assert!(!bus.has_event("panel.priorities_aggregated.v1"));
    }

    #[tokio::test]
    async fn filters_by_type() {
        let bus = InMemoryEventBus::new();
        bus.publish(envelope("judgment.recorded.v1")).await.unwrap();
        bus.publish(envelope("analysis.dominance_analyzed.v1")).await.unwrap();
        bus.publish(envelope("judgment.recorded.v1")).await.unwrap();

        assert_eq!(bus.events_of_type("judgment.recorded.v1").len(), 2);
    }

    #[tokio::test]
    async fn filters_by_correlation() {
        let bus = InMemoryEventBus::new();
        bus.publish(envelope("judgment.recorded.v1").with_correlation_id("run-1"))
            .await
            .unwrap();
        bus.publish(envelope("judgment.recorded.v1").with_correlation_id("run-2"))
            .await
            .unwrap();
        bus.publish(envelope("judgment.recorded.v1")).await.unwrap();

        assert_eq!(bus.events_correlated_with("run-1").len(), 1);
    }

    #[tokio::test]
    async fn batch_preserves_order() {
        let bus = InMemoryEventBus::new();
        bus.publish_all(vec![
            envelope("judgment.recorded.v1"),
            envelope("criterion.normalized.v1"),
        ])
        .await
        .unwrap();

        let types: Vec<String> = bus
            .published_events()
            .into_iter()
            .map(|e| e.event_type)
            .collect();
        assert_eq!(types, vec!["judgment.recorded.v1", "criterion.normalized.v1"]);
    }
}
