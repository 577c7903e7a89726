//! RegisterCriterionHandler - adds a criterion to the decision.

use std::sync::Arc;

use tracing::info;

use crate::domain::criteria::{Criterion, CriterionKind, Direction};
use crate::domain::foundation::{CommandMetadata, EngineError};
use crate::ports::CriterionRepository;

/// Command to register a criterion.
#[derive(Debug, Clone)]
pub struct RegisterCriterionCommand {
    pub name: String,
    pub weight: i32,
    pub kind: CriterionKind,
    pub direction: Option<Direction>,
    pub measure: String,
    pub scale: String,
}

/// Handler for registering criteria.
pub struct RegisterCriterionHandler {
    criteria: Arc<dyn CriterionRepository>,
}

impl RegisterCriterionHandler {
    pub fn new(criteria: Arc<dyn CriterionRepository>) -> Self {
        Self { criteria }
    }

    pub async fn handle(
        &self,
        cmd: RegisterCriterionCommand,
        metadata: CommandMetadata,
    ) -> Result<Criterion, EngineError> {
        let mut criterion = Criterion::new(cmd.name, cmd.weight, cmd.kind)?
            .with_measure(cmd.measure, cmd.scale);
        criterion.direction = cmd.direction;

        self.criteria.save(&criterion).await?;
        info!(
            criterion_id = %criterion.id,
            correlation_id = metadata.correlation_id(),
            "Criterion registered"
        );
        Ok(criterion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestContext;

    fn command(name: &str) -> RegisterCriterionCommand {
        RegisterCriterionCommand {
            name: name.to_string(),
            weight: 3,
            kind: CriterionKind::Quantitative,
            direction: Some(Direction::Minimize),
            measure: "USD".to_string(),
            scale: "purchase price".to_string(),
        }
    }

    #[tokio::test]
    async fn stores_criterion() {
        let ctx = TestContext::new();
        let handler = RegisterCriterionHandler::new(ctx.repos.criterion_repository());

        let criterion = handler
            .handle(command("Price"), CommandMetadata::test_fixture())
            .await
            .unwrap();

        let stored = ctx.repos.criterion_repository().find_by_id(&criterion.id).await.unwrap();
        assert_eq!(stored, Some(criterion.clone()));
        assert_eq!(criterion.direction, Some(Direction::Minimize));
        assert_eq!(criterion.measure, "USD");
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let ctx = TestContext::new();
        let handler = RegisterCriterionHandler::new(ctx.repos.criterion_repository());

        let err = handler
            .handle(command(" "), CommandMetadata::test_fixture())
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }
}
