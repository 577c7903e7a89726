//! SetDirectionHandler - chooses whether a criterion is maximized or minimized.

use std::sync::Arc;

use crate::domain::criteria::{Direction, NormalizedMark};
use crate::domain::foundation::{CommandMetadata, CriterionId, EngineError};
use crate::ports::{CriterionRepository, EventPublisher, MarkRepository};

use super::normalize_criterion::renormalize;

/// Command to set a criterion's direction.
#[derive(Debug, Clone)]
pub struct SetDirectionCommand {
    pub criterion_id: CriterionId,
    pub direction: Direction,
}

/// Handler for setting a direction. Renormalizes the criterion afterwards.
pub struct SetDirectionHandler {
    criteria: Arc<dyn CriterionRepository>,
    marks: Arc<dyn MarkRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SetDirectionHandler {
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
        cmd: SetDirectionCommand,
        metadata: CommandMetadata,
    ) -> Result<Vec<NormalizedMark>, EngineError> {
        let mut criterion = self
            .criteria
            .find_by_id(&cmd.criterion_id)
            .await?
            .ok_or(EngineError::UnknownCriterion(cmd.criterion_id))?;

        criterion.direction = Some(cmd.direction);
        self.criteria.save(&criterion).await?;

        renormalize(
            self.marks.as_ref(),
            self.event_publisher.as_ref(),
            &criterion,
            &metadata,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestContext;
    use crate::domain::criteria::{Criterion, CriterionKind, Mark};

    #[tokio::test]
    async fn flipping_direction_inverts_normalization() {
        let ctx = TestContext::new();
        let criterion = Criterion::new("Noise", 1, CriterionKind::Quantitative)
            .unwrap()
            .with_direction(Direction::Maximize);
        ctx.repos.criterion_repository().save(&criterion).await.unwrap();
        let quiet = Mark::new(criterion.id, "quiet", 20);
        let loud = Mark::new(criterion.id, "loud", 80);
        ctx.repos.mark_repository().save(&quiet).await.unwrap();
        ctx.repos.mark_repository().save(&loud).await.unwrap();

        let handler = SetDirectionHandler::new(
            ctx.repos.criterion_repository(),
            ctx.repos.mark_repository(),
            ctx.publisher(),
        );
        let normalized = handler
            .handle(
                SetDirectionCommand { criterion_id: criterion.id, direction: Direction::Minimize },
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap();

        let quiet_value = normalized.iter().find(|n| n.mark_id == quiet.id).map(|n| n.value.value());
        let loud_value = normalized.iter().find(|n| n.mark_id == loud.id).map(|n| n.value.value());
        assert_eq!(quiet_value, Some(100));
        assert_eq!(loud_value, Some(25));

        let stored = ctx.repos.criterion_repository().find_by_id(&criterion.id).await.unwrap().unwrap();
        assert_eq!(stored.direction, Some(Direction::Minimize));
    }
}
