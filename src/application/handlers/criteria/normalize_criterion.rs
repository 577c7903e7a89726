//! NormalizeCriterionHandler - recomputes every normalized mark of a criterion.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::criteria::{Criterion, CriterionNormalized, NormalizedMark, Normalizer};
use crate::domain::foundation::{CommandMetadata, CriterionId, EngineError, SerializableDomainEvent};
use crate::ports::{CriterionRepository, EventPublisher, MarkRepository};

/// Command to normalize one criterion.
#[derive(Debug, Clone)]
pub struct NormalizeCriterionCommand {
    pub criterion_id: CriterionId,
}

/// Handler for normalizing a criterion's marks.
pub struct NormalizeCriterionHandler {
    criteria: Arc<dyn CriterionRepository>,
    marks: Arc<dyn MarkRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl NormalizeCriterionHandler {
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
        cmd: NormalizeCriterionCommand,
        metadata: CommandMetadata,
    ) -> Result<Vec<NormalizedMark>, EngineError> {
        let criterion = self
            .criteria
            .find_by_id(&cmd.criterion_id)
            .await?
            .ok_or(EngineError::UnknownCriterion(cmd.criterion_id))?;

        renormalize(
            self.marks.as_ref(),
            self.event_publisher.as_ref(),
            &criterion,
            &metadata,
        )
        .await
    }
}

/// Recomputes and stores the normalized values of every mark of `criterion`.
///
/// On failure the criterion's normalized values are cleared so no mark keeps
/// a value computed from different inputs, and the error is returned.
pub(crate) async fn renormalize(
    marks: &dyn MarkRepository,
    event_publisher: &dyn EventPublisher,
    criterion: &Criterion,
    metadata: &CommandMetadata,
) -> Result<Vec<NormalizedMark>, EngineError> {
    let current = marks.find_by_criterion(&criterion.id).await?;

    let normalized = match Normalizer::normalize(criterion, &current) {
        Ok(normalized) => normalized,
        Err(err) => {
            marks.replace_normalized(&criterion.id, &[]).await?;
            warn!(
                criterion_id = %criterion.id,
                error = %err,
                "Normalization failed, normalized values cleared"
            );
            return Err(err);
        }
    };

    marks.replace_normalized(&criterion.id, &normalized).await?;
    info!(
        criterion_id = %criterion.id,
        marks = normalized.len(),
        "Criterion normalized"
    );

    let envelope = CriterionNormalized::new(criterion.id, normalized.clone())
        .to_envelope()?
        .with_correlation_id(metadata.correlation_id());
    debug!(event_type = %envelope.event_type, "Publishing event");
    event_publisher.publish(envelope).await?;

    Ok(normalized)
}
