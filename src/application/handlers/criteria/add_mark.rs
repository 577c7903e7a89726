//! AddMarkHandler - adds a mark to a criterion scale.

use std::sync::Arc;

use crate::domain::criteria::Mark;
use crate::domain::foundation::{CommandMetadata, CriterionId, EngineError};
use crate::ports::{CriterionRepository, EventPublisher, MarkRepository};

use super::normalize_criterion::renormalize;

/// Command to add a mark.
#[derive(Debug, Clone)]
pub struct AddMarkCommand {
    pub criterion_id: CriterionId,
    pub name: String,
    pub numeric_value: i64,
    pub rank: i32,
}

/// Handler for adding marks.
///
/// When the criterion already has a direction, every mark of the criterion
/// is renormalized, since a new extremum changes all values.
pub struct AddMarkHandler {
    criteria: Arc<dyn CriterionRepository>,
    marks: Arc<dyn MarkRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl AddMarkHandler {
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

    pub async fn handle(&self, cmd: AddMarkCommand, metadata: CommandMetadata) -> Result<Mark, EngineError> {
        let criterion = self
            .criteria
            .find_by_id(&cmd.criterion_id)
            .await?
            .ok_or(EngineError::UnknownCriterion(cmd.criterion_id))?;

        let mut mark = Mark::new(criterion.id, cmd.name, cmd.numeric_value);
        mark.rank = cmd.rank;
        self.marks.save(&mark).await?;

        if criterion.direction.is_some() {
            let normalized = renormalize(
                self.marks.as_ref(),
                self.event_publisher.as_ref(),
                &criterion,
                &metadata,
            )
            .await?;
            mark.normalized = normalized
                .iter()
                .find(|n| n.mark_id == mark.id)
                .map(|n| n.value);
        }

        Ok(mark)
    }
}
