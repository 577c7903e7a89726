//! RemoveCriterionHandler - deletes a criterion with its marks and profile entries.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CommandMetadata, CriterionId, EngineError};
use crate::ports::{CriterionRepository, MarkRepository, ProfileRepository};

/// Command to remove a criterion.
#[derive(Debug, Clone)]
pub struct RemoveCriterionCommand {
    pub criterion_id: CriterionId,
}

/// Handler for removing criteria.
pub struct RemoveCriterionHandler {
    criteria: Arc<dyn CriterionRepository>,
    marks: Arc<dyn MarkRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl RemoveCriterionHandler {
    pub fn new(
        criteria: Arc<dyn CriterionRepository>,
        marks: Arc<dyn MarkRepository>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            criteria,
            marks,
            profiles,
        }
    }

    pub async fn handle(&self, cmd: RemoveCriterionCommand, metadata: CommandMetadata) -> Result<(), EngineError> {
        if self.criteria.find_by_id(&cmd.criterion_id).await?.is_none() {
            return Err(EngineError::UnknownCriterion(cmd.criterion_id));
        }

        let removed = self.marks.delete_by_criterion(&cmd.criterion_id).await?;
        self.profiles.drop_marks(&removed).await?;
        self.criteria.delete(&cmd.criterion_id).await?;

        info!(
            criterion_id = %cmd.criterion_id,
            marks_removed = removed.len(),
            correlation_id = metadata.correlation_id(),
            "Criterion removed"
        );
        Ok(())
    }
}
