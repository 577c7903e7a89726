//! ScenarioRunner - feeds a scenario through the application handlers.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use super::report::{
    CriterionReport, DecisionMakerReport, MarkReport, RankingEntry, Report, ScoreEntry,
};
use super::{Scenario, ScenarioError};
use crate::adapters::{InMemoryEventBus, InMemoryRepositories};
use crate::application::handlers::{
    AddMarkCommand, AddMarkHandler, AggregatePrioritiesHandler, AnalyzeDominanceCommand,
    AnalyzeDominanceHandler, AssignProfileCommand, AssignProfileHandler, GroupRankingHandler,
    JudgmentInput, RecordJudgmentsCommand, RecordJudgmentsHandler, RecordPeerComparisonCommand,
    RecordPeerComparisonHandler, RegisterAlternativeCommand, RegisterAlternativeHandler,
    RegisterCriterionCommand, RegisterCriterionHandler, RegisterDecisionMakerCommand,
    RegisterDecisionMakerHandler, ScoreDecisionMakerCommand, ScoreDecisionMakerHandler,
    SetDirectionCommand, SetDirectionHandler,
};
use crate::domain::foundation::{
    AlternativeId, CommandMetadata, CriterionId, DecisionMakerId, EngineError, MarkId,
};
use crate::ports::EventPublisher;

/// Evaluates scenarios over a private set of in-memory adapters.
///
/// State accumulates across runs, so use one runner per scenario.
pub struct ScenarioRunner {
    repos: InMemoryRepositories,
    bus: Arc<InMemoryEventBus>,
    strict_completeness: bool,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self {
            repos: InMemoryRepositories::new(),
            bus: Arc::new(InMemoryEventBus::new()),
            strict_completeness: false,
        }
    }

    /// Fails scoring on any decision maker with unjudged pairs.
    pub fn with_strict_completeness(mut self, strict: bool) -> Self {
        self.strict_completeness = strict;
        self
    }

    /// The adapters the scenario was loaded into.
    pub fn repositories(&self) -> &InMemoryRepositories {
        &self.repos
    }

    /// Loads the scenario, runs every analysis and builds the report.
    ///
    /// Normalization and priority failures are reported in place; every
    /// other error aborts the run.
    pub async fn run(&self, scenario: &Scenario) -> Result<Report, ScenarioError> {
        let metadata = CommandMetadata::new().with_source("scenario");

        let decision_makers = self.register_decision_makers(scenario, &metadata).await?;
        let dm_ids: HashMap<String, DecisionMakerId> = decision_makers.iter().cloned().collect();

        let (criteria, mark_ids, normalization_errors) = self.register_criteria(scenario, &metadata).await?;
        let alternatives = self.register_alternatives(scenario, &mark_ids, &metadata).await?;
        let alt_ids: HashMap<String, AlternativeId> = alternatives.iter().cloned().collect();
        let alt_names: HashMap<AlternativeId, String> =
            alternatives.iter().map(|(name, id)| (*id, name.clone())).collect();

        self.record_judgments(scenario, &decision_makers, &dm_ids, &alt_ids, &metadata)
            .await?;
        self.record_peer_comparisons(scenario, &dm_ids, &metadata).await?;

        let score = ScoreDecisionMakerHandler::new(
            self.repos.alternative_repository(),
            self.repos.decision_maker_repository(),
            self.repos.judgment_repository(),
            self.repos.result_repository(),
            self.publisher(),
        )
        .with_strict_completeness(self.strict_completeness);
        let analyze = AnalyzeDominanceHandler::new(
            self.repos.alternative_repository(),
            self.repos.decision_maker_repository(),
            self.repos.judgment_repository(),
            self.publisher(),
        );

        let name_of = |id: &AlternativeId| alt_names.get(id).cloned().unwrap_or_else(|| id.to_string());
        let mut dm_reports = Vec::with_capacity(decision_makers.len());
        for (name, id) in &decision_makers {
            let copeland = score
                .handle(ScoreDecisionMakerCommand { decision_maker_id: *id }, metadata.clone())
                .await?;
            let dominance = analyze
                .handle(AnalyzeDominanceCommand { decision_maker_id: *id }, metadata.clone())
                .await?;

            dm_reports.push(DecisionMakerReport {
                name: name.clone(),
                priority: None,
                copeland: alternatives
                    .iter()
                    .map(|(alt_name, alt_id)| ScoreEntry {
                        alternative: alt_name.clone(),
                        score: copeland.score_of(alt_id).unwrap_or(0),
                    })
                    .collect(),
                winners: copeland.winners.iter().map(name_of).collect(),
                non_dominated: dominance.non_dominated.iter().map(name_of).collect(),
                missing_pairs: copeland
                    .warning
                    .iter()
                    .flat_map(|w| w.missing.iter())
                    .map(|pair| (name_of(&pair.first), name_of(&pair.second)))
                    .collect(),
            });
        }

        let aggregate = AggregatePrioritiesHandler::new(
            self.repos.decision_maker_repository(),
            self.repos.peer_comparison_repository(),
            self.publisher(),
        );
        let priority_error = match aggregate.handle(metadata.clone()).await {
            Ok(_) => None,
            Err(err @ EngineError::Infrastructure(_)) => return Err(err.into()),
            Err(err) => Some(err.to_string()),
        };
        let priorities: HashMap<DecisionMakerId, Option<i64>> = self
            .repos
            .decision_maker_repository()
            .list()
            .await
            .map_err(EngineError::from)?
            .into_iter()
            .map(|dm| (dm.id, dm.priority))
            .collect();
        for (report, (_, id)) in dm_reports.iter_mut().zip(&decision_makers) {
            report.priority = priorities.get(id).copied().flatten();
        }

        let ranking = GroupRankingHandler::new(
            self.repos.alternative_repository(),
            self.repos.decision_maker_repository(),
            self.repos.result_repository(),
        )
        .handle()
        .await?;

        let report = Report {
            criteria: self.criterion_reports(&criteria, &normalization_errors).await?,
            decision_makers: dm_reports,
            priority_error,
            group_ranking: ranking
                .iter()
                .map(|r| RankingEntry {
                    alternative: name_of(&r.alternative_id),
                    score: r.score,
                    position: r.position,
                })
                .collect(),
            events_published: self.bus.event_count(),
        };

        info!(
            criteria = report.criteria.len(),
            alternatives = alternatives.len(),
            decision_makers = report.decision_makers.len(),
            correlation_id = metadata.correlation_id(),
            "Scenario evaluated"
        );
        Ok(report)
    }

    fn publisher(&self) -> Arc<dyn EventPublisher> {
        self.bus.clone()
    }

    async fn register_decision_makers(
        &self,
        scenario: &Scenario,
        metadata: &CommandMetadata,
    ) -> Result<Vec<(String, DecisionMakerId)>, ScenarioError> {
        let handler = RegisterDecisionMakerHandler::new(
            self.repos.decision_maker_repository(),
            self.repos.peer_comparison_repository(),
            self.repos.alternative_repository(),
            self.repos.judgment_repository(),
        );
        let mut registered: Vec<(String, DecisionMakerId)> = Vec::new();
        for name in &scenario.decision_makers {
            ensure_unique(registered.iter().map(|(n, _)| n), "decision maker", name)?;
            let dm = handler
                .handle(RegisterDecisionMakerCommand { name: name.clone() }, metadata.clone())
                .await?;
            registered.push((name.clone(), dm.id));
        }
        Ok(registered)
    }

    /// Registers criteria and marks, then sets directions so each criterion
    /// is normalized once over its full mark set.
    #[allow(clippy::type_complexity)]
    async fn register_criteria(
        &self,
        scenario: &Scenario,
        metadata: &CommandMetadata,
    ) -> Result<
        (
            Vec<CriterionId>,
            HashMap<(String, String), MarkId>,
            HashMap<CriterionId, String>,
        ),
        ScenarioError,
    > {
        let register = RegisterCriterionHandler::new(self.repos.criterion_repository());
        let add_mark = AddMarkHandler::new(
            self.repos.criterion_repository(),
            self.repos.mark_repository(),
            self.publisher(),
        );
        let set_direction = SetDirectionHandler::new(
            self.repos.criterion_repository(),
            self.repos.mark_repository(),
            self.publisher(),
        );

        let mut names: Vec<&String> = Vec::new();
        let mut ids = Vec::new();
        let mut mark_ids = HashMap::new();
        let mut errors = HashMap::new();
        for def in &scenario.criteria {
            ensure_unique(names.iter().copied(), "criterion", &def.name)?;
            names.push(&def.name);

            let criterion = register
                .handle(
                    RegisterCriterionCommand {
                        name: def.name.clone(),
                        weight: def.weight,
                        kind: def.kind,
                        direction: None,
                        measure: def.measure.clone(),
                        scale: def.scale.clone(),
                    },
                    metadata.clone(),
                )
                .await?;
            ids.push(criterion.id);

            for mark in &def.marks {
                let key = (def.name.clone(), mark.name.clone());
                if mark_ids.contains_key(&key) {
                    return Err(ScenarioError::DuplicateName {
                        kind: "mark",
                        name: format!("{}/{}", def.name, mark.name),
                    });
                }
                let stored = add_mark
                    .handle(
                        AddMarkCommand {
                            criterion_id: criterion.id,
                            name: mark.name.clone(),
                            numeric_value: mark.value,
                            rank: mark.rank,
                        },
                        metadata.clone(),
                    )
                    .await?;
                mark_ids.insert(key, stored.id);
            }

            if let Some(direction) = def.direction {
                let normalized = set_direction
                    .handle(
                        SetDirectionCommand {
                            criterion_id: criterion.id,
                            direction,
                        },
                        metadata.clone(),
                    )
                    .await;
                match normalized {
                    Ok(_) => {}
                    Err(err @ EngineError::Infrastructure(_)) => return Err(err.into()),
                    Err(err) => {
                        warn!(criterion = %def.name, error = %err, "Criterion left unnormalized");
                        errors.insert(criterion.id, err.to_string());
                    }
                }
            }
        }
        Ok((ids, mark_ids, errors))
    }

    async fn register_alternatives(
        &self,
        scenario: &Scenario,
        mark_ids: &HashMap<(String, String), MarkId>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<(String, AlternativeId)>, ScenarioError> {
        let register = RegisterAlternativeHandler::new(
            self.repos.alternative_repository(),
            self.repos.decision_maker_repository(),
            self.repos.judgment_repository(),
        );
        let assign = AssignProfileHandler::new(
            self.repos.alternative_repository(),
            self.repos.mark_repository(),
            self.repos.profile_repository(),
        );

        let mut registered: Vec<(String, AlternativeId)> = Vec::new();
        for def in &scenario.alternatives {
            ensure_unique(registered.iter().map(|(n, _)| n), "alternative", &def.name)?;
            let alternative = register
                .handle(RegisterAlternativeCommand { name: def.name.clone() }, metadata.clone())
                .await?;

            let chosen = def
                .profile
                .iter()
                .map(|(criterion, mark)| {
                    mark_ids
                        .get(&(criterion.clone(), mark.clone()))
                        .copied()
                        .ok_or_else(|| ScenarioError::unknown("mark", format!("{}/{}", criterion, mark)))
                })
                .collect::<Result<Vec<_>, _>>()?;
            if !chosen.is_empty() {
                assign
                    .handle(
                        AssignProfileCommand {
                            alternative_id: alternative.id,
                            mark_ids: chosen,
                        },
                        metadata.clone(),
                    )
                    .await?;
            }
            registered.push((def.name.clone(), alternative.id));
        }
        Ok(registered)
    }

    async fn record_judgments(
        &self,
        scenario: &Scenario,
        decision_makers: &[(String, DecisionMakerId)],
        dm_ids: &HashMap<String, DecisionMakerId>,
        alt_ids: &HashMap<String, AlternativeId>,
        metadata: &CommandMetadata,
    ) -> Result<(), ScenarioError> {
        let mut batches: HashMap<DecisionMakerId, Vec<JudgmentInput>> = HashMap::new();
        for judgment in &scenario.judgments {
            let dm = lookup(dm_ids, "decision maker", &judgment.decision_maker)?;
            batches.entry(dm).or_default().push(JudgmentInput {
                first: lookup(alt_ids, "alternative", &judgment.first)?,
                second: lookup(alt_ids, "alternative", &judgment.second)?,
                outcome: judgment.outcome,
            });
        }

        let handler = RecordJudgmentsHandler::new(
            self.repos.alternative_repository(),
            self.repos.decision_maker_repository(),
            self.repos.judgment_repository(),
            self.publisher(),
        );
        for (_, id) in decision_makers {
            if let Some(judgments) = batches.remove(id) {
                handler
                    .handle(
                        RecordJudgmentsCommand {
                            decision_maker_id: *id,
                            judgments,
                        },
                        metadata.clone(),
                    )
                    .await?;
            }
        }
        Ok(())
    }

    async fn record_peer_comparisons(
        &self,
        scenario: &Scenario,
        dm_ids: &HashMap<String, DecisionMakerId>,
        metadata: &CommandMetadata,
    ) -> Result<(), ScenarioError> {
        let handler = RecordPeerComparisonHandler::new(
            self.repos.decision_maker_repository(),
            self.repos.peer_comparison_repository(),
        );
        for comparison in &scenario.peer_comparisons {
            handler
                .handle(
                    RecordPeerComparisonCommand {
                        master: lookup(dm_ids, "decision maker", &comparison.master)?,
                        target: lookup(dm_ids, "decision maker", &comparison.target)?,
                        score: comparison.score,
                    },
                    metadata.clone(),
                )
                .await?;
        }
        Ok(())
    }

    async fn criterion_reports(
        &self,
        criteria: &[CriterionId],
        errors: &HashMap<CriterionId, String>,
    ) -> Result<Vec<CriterionReport>, ScenarioError> {
        let repository = self.repos.criterion_repository();
        let marks = self.repos.mark_repository();
        let mut reports = Vec::with_capacity(criteria.len());
        for id in criteria {
            let criterion = repository
                .find_by_id(id)
                .await
                .map_err(EngineError::from)?
                .ok_or(EngineError::UnknownCriterion(*id))?;
            let marks = marks.find_by_criterion(id).await.map_err(EngineError::from)?;
            reports.push(CriterionReport {
                name: criterion.name,
                weight: criterion.weight,
                direction: criterion.direction,
                marks: marks
                    .into_iter()
                    .map(|m| MarkReport {
                        name: m.name,
                        value: m.numeric_value,
                        normalized: m.normalized.map(|p| p.value()),
                    })
                    .collect(),
                normalization_error: errors.get(id).cloned(),
            });
        }
        Ok(reports)
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup<T: Copy>(ids: &HashMap<String, T>, kind: &'static str, name: &str) -> Result<T, ScenarioError> {
    ids.get(name)
        .copied()
        .ok_or_else(|| ScenarioError::unknown(kind, name))
}

fn ensure_unique<'a>(
    mut existing: impl Iterator<Item = &'a String>,
    kind: &'static str,
    name: &str,
) -> Result<(), ScenarioError> {
    if existing.any(|n| n == name) {
        return Err(ScenarioError::DuplicateName {
            kind,
            name: name.to_string(),
        });
    }
    Ok(())
}
