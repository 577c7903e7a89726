//! UpdateMarkHandler - changes a mark's raw value.

use std::sync::Arc;

use tracing::debug;

use crate::domain::criteria::{Mark, NormalizedMark};
use crate::domain::foundation::{CommandMetadata, EngineError, MarkId};
use crate::ports::{CriterionRepository, EventPublisher, MarkRepository};

use super::normalize_criterion::renormalize;

/// Command to change a mark's numeric value.
#[derive(Debug, Clone)]
pub struct UpdateMarkCommand {
    pub mark_id: MarkId,
    pub numeric_value: i64,
}

/// Result of a mark update.
#[derive(Debug, Clone)]
pub struct UpdateMarkResult {
    pub mark: Mark,
    /// Values of every mark of the criterion; empty when it has no direction.
    pub normalized: Vec<NormalizedMark>,
}

/// Handler for updating marks.
///
/// A changed value can move the criterion's extremum, so the whole criterion
/// is renormalized. Without a direction the stored normalized values are
/// cleared instead.
pub struct UpdateMarkHandler {
    criteria: Arc<dyn CriterionRepository>,
    marks: Arc<dyn MarkRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdateMarkHandler {
    pub fn new(
        criteria: Arc<dyn CriterionRepository>,
        marks: Arc<dyn MarkRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            criteria,
            marks,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateMarkCommand,
        metadata: CommandMetadata,
    ) -> Result<UpdateMarkResult, EngineError> {
        let mut mark = self
            .marks
            .find_by_id(&cmd.mark_id)
            .await?
            .ok_or(EngineError::UnknownMark(cmd.mark_id))?;
        let criterion = self
            .criteria
            .find_by_id(&mark.criterion_id)
            .await?
            .ok_or(EngineError::UnknownCriterion(mark.criterion_id))?;

        mark.numeric_value = cmd.numeric_value;
        mark.normalized = None;
        self.marks.save(&mark).await?;
        debug!(mark_id = %mark.id, value = mark.numeric_value, "Mark value updated");

        let normalized = if criterion.direction.is_some() {
            renormalize(
                self.marks.as_ref(),
                self.event_publisher.as_ref(),
                &criterion,
                &metadata,
            )
            .await?
        } else {
            self.marks.replace_normalized(&criterion.id, &[]).await?;
            Vec::new()
        };

        mark.normalized = normalized
            .iter()
            .find(|n| n.mark_id == mark.id)
            .map(|n| n.value);

        Ok(UpdateMarkResult { mark, normalized })
    }
}
