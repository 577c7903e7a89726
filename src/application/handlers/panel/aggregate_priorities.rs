//! AggregatePrioritiesHandler - recomputes every decision maker's priority.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::{CommandMetadata, DecisionMakerId, EngineError, SerializableDomainEvent};
use crate::domain::panel::{
    ComparisonMatrix, DecisionMakerPriority, PrioritiesAggregated, PriorityAggregator,
};
use crate::ports::{DecisionMakerRepository, EventPublisher, PeerComparisonRepository};

/// Handler for priority aggregation.
///
/// On failure every stored priority is cleared so that no stale value
/// outlives the comparisons it was computed from.
pub struct AggregatePrioritiesHandler {
    decision_makers: Arc<dyn DecisionMakerRepository>,
    peer_comparisons: Arc<dyn PeerComparisonRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl AggregatePrioritiesHandler {
    pub fn new(
        decision_makers: Arc<dyn DecisionMakerRepository>,
        peer_comparisons: Arc<dyn PeerComparisonRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            decision_makers,
            peer_comparisons,
            event_publisher,
        }
    }

    pub async fn handle(&self, metadata: CommandMetadata) -> Result<Vec<DecisionMakerPriority>, EngineError> {
        let ids: Vec<DecisionMakerId> =
            self.decision_makers.list().await?.iter().map(|dm| dm.id).collect();
        let comparisons = self.peer_comparisons.list().await?;
        let matrix = ComparisonMatrix::from_comparisons(&ids, &comparisons);

        let priorities = match PriorityAggregator::aggregate(&matrix) {
            Ok(priorities) => priorities,
            Err(err) => {
                self.decision_makers.replace_priorities(&[]).await?;
                warn!(error = %err, decision_makers = ids.len(), "Priority aggregation failed");
                return Err(err);
            }
        };

        self.decision_makers.replace_priorities(&priorities).await?;
        info!(
            decision_makers = priorities.len(),
            correlation_id = metadata.correlation_id(),
            "Priorities aggregated"
        );

        let envelope = PrioritiesAggregated::new(priorities.clone())
            .to_envelope()?
            .with_correlation_id(metadata.correlation_id());
        debug!(event_type = %envelope.event_type, "Publishing event");
        self.event_publisher.publish(envelope).await?;

        Ok(priorities)
    }
}
