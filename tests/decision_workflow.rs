//! Integration tests for a full group decision.
//!
//! Drives the application handlers over the in-memory adapters:
//! 1. Criteria and marks are registered and normalized
//! 2. Alternatives receive profiles and comparison suggestions
//! 3. Two decision makers judge the alternatives
//! 4. Copeland scores, dominance, priorities and the group ranking are computed
//! 5. Removing an alternative cascades and rescoring reflects it

use std::sync::Arc;

use consensus_engine::adapters::{InMemoryEventBus, InMemoryRepositories};
use consensus_engine::application::{
    AddMarkCommand, AddMarkHandler, AggregatePrioritiesHandler, AnalyzeDominanceCommand,
    AnalyzeDominanceHandler, AssignProfileCommand, AssignProfileHandler, GroupRankingHandler,
    JudgmentInput, RecordJudgmentsCommand, RecordJudgmentsHandler, RecordPeerComparisonCommand,
    RecordPeerComparisonHandler, RegisterAlternativeCommand, RegisterAlternativeHandler,
    RegisterCriterionCommand, RegisterCriterionHandler, RegisterDecisionMakerCommand,
    RegisterDecisionMakerHandler, RemoveAlternativeCommand, RemoveAlternativeHandler,
    ScoreDecisionMakerCommand, ScoreDecisionMakerHandler, SuggestComparisonHandler,
    SuggestComparisonQuery,
};
use consensus_engine::domain::criteria::{CriterionKind, Direction};
use consensus_engine::domain::foundation::{AlternativeId, CommandMetadata, DecisionMakerId};
use consensus_engine::domain::judgment::{Outcome, PreferenceRelation};
use consensus_engine::ports::EventPublisher;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Workspace {
    repos: InMemoryRepositories,
    bus: Arc<InMemoryEventBus>,
}

impl Workspace {
    fn new() -> Self {
        Self {
            repos: InMemoryRepositories::new(),
            bus: Arc::new(InMemoryEventBus::new()),
        }
    }

    fn publisher(&self) -> Arc<dyn EventPublisher> {
        self.bus.clone()
    }

    async fn decision_maker(&self, name: &str) -> DecisionMakerId {
        RegisterDecisionMakerHandler::new(
            self.repos.decision_maker_repository(),
            self.repos.peer_comparison_repository(),
            self.repos.alternative_repository(),
            self.repos.judgment_repository(),
        )
        .handle(
            RegisterDecisionMakerCommand { name: name.to_string() },
            CommandMetadata::new(),
        )
        .await
        .unwrap()
        .id
    }

    async fn alternative(&self, name: &str) -> AlternativeId {
        RegisterAlternativeHandler::new(
            self.repos.alternative_repository(),
            self.repos.decision_maker_repository(),
            self.repos.judgment_repository(),
        )
        .handle(
            RegisterAlternativeCommand { name: name.to_string() },
            CommandMetadata::new(),
        )
        .await
        .unwrap()
        .id
    }

    async fn judge(&self, dm: DecisionMakerId, judgments: &[(AlternativeId, AlternativeId, Outcome)]) {
        RecordJudgmentsHandler::new(
            self.repos.alternative_repository(),
            self.repos.decision_maker_repository(),
            self.repos.judgment_repository(),
            self.publisher(),
        )
        .handle(
            RecordJudgmentsCommand {
                decision_maker_id: dm,
                judgments: judgments
                    .iter()
                    .map(|(first, second, outcome)| JudgmentInput {
                        first: *first,
                        second: *second,
                        outcome: *outcome,
                    })
                    .collect(),
            },
            CommandMetadata::new(),
        )
        .await
        .unwrap();
    }

    fn scorer(&self) -> ScoreDecisionMakerHandler {
        ScoreDecisionMakerHandler::new(
            self.repos.alternative_repository(),
            self.repos.decision_maker_repository(),
            self.repos.judgment_repository(),
            self.repos.result_repository(),
            self.publisher(),
        )
    }

    fn ranking(&self) -> GroupRankingHandler {
        GroupRankingHandler::new(
            self.repos.alternative_repository(),
            self.repos.decision_maker_repository(),
            self.repos.result_repository(),
        )
    }
}

// =============================================================================
// Workflow Tests
// =============================================================================

#[tokio::test]
async fn profiles_feed_comparison_suggestions() {
    let ws = Workspace::new();
    let criterion = RegisterCriterionHandler::new(ws.repos.criterion_repository())
        .handle(
            RegisterCriterionCommand {
                name: "Travel time".to_string(),
                weight: 3,
                kind: CriterionKind::Quantitative,
                direction: Some(Direction::Minimize),
                measure: "min".to_string(),
                scale: "door to door".to_string(),
            },
            CommandMetadata::new(),
        )
        .await
        .unwrap();

    let add_mark = AddMarkHandler::new(
        ws.repos.criterion_repository(),
        ws.repos.mark_repository(),
        ws.publisher(),
    );
    let mut marks = Vec::new();
    for (name, minutes) in [("fast", 20), ("slow", 40)] {
        let mark = add_mark
            .handle(
                AddMarkCommand {
                    criterion_id: criterion.id,
                    name: name.to_string(),
                    numeric_value: minutes,
                    rank: 0,
                },
                CommandMetadata::new(),
            )
            .await
            .unwrap();
        marks.push(mark.id);
    }

    let tram = ws.alternative("Tram").await;
    let bike = ws.alternative("Bike").await;
    let assign = AssignProfileHandler::new(
        ws.repos.alternative_repository(),
        ws.repos.mark_repository(),
        ws.repos.profile_repository(),
    );
    for (alternative_id, mark) in [(tram, marks[0]), (bike, marks[1])] {
        assign
            .handle(
                AssignProfileCommand { alternative_id, mark_ids: vec![mark] },
                CommandMetadata::new(),
            )
            .await
            .unwrap();
    }

    let view = SuggestComparisonHandler::new(
        ws.repos.alternative_repository(),
        ws.repos.profile_repository(),
        ws.repos.mark_repository(),
    )
    .handle(SuggestComparisonQuery { first: tram, second: bike })
    .await
    .unwrap();

    assert_eq!(view.first_advantages.len(), 1);
    assert_eq!(view.first_advantages[0].first_value.value(), 100);
    assert_eq!(view.first_advantages[0].second_value.value(), 50);
    assert!(view.second_advantages.is_empty());
    assert!(ws.bus.has_event("criterion.normalized.v1"));
}

#[tokio::test]
async fn cyclic_and_transitive_panel_produces_group_ranking() {
    let ws = Workspace::new();
    let alice = ws.decision_maker("Alice").await;
    let bob = ws.decision_maker("Bob").await;
    let a = ws.alternative("A").await;
    let b = ws.alternative("B").await;
    let c = ws.alternative("C").await;

    ws.judge(alice, &[(a, b, Outcome::Greater), (b, c, Outcome::Greater), (c, a, Outcome::Greater)])
        .await;
    ws.judge(bob, &[(a, b, Outcome::Greater), (b, c, Outcome::Greater), (a, c, Outcome::Greater)])
        .await;

    let scorer = ws.scorer();
    let alice_scores = scorer
        .handle(ScoreDecisionMakerCommand { decision_maker_id: alice }, CommandMetadata::new())
        .await
        .unwrap();
    let bob_scores = scorer
        .handle(ScoreDecisionMakerCommand { decision_maker_id: bob }, CommandMetadata::new())
        .await
        .unwrap();
    assert_eq!(alice_scores.winners, vec![a, b, c]);
    assert_eq!(bob_scores.winners, vec![a]);
    assert_eq!(bob_scores.score_of(&c), Some(0));

    let dominance = AnalyzeDominanceHandler::new(
        ws.repos.alternative_repository(),
        ws.repos.decision_maker_repository(),
        ws.repos.judgment_repository(),
        ws.publisher(),
    );
    let alice_front = dominance
        .handle(AnalyzeDominanceCommand { decision_maker_id: alice }, CommandMetadata::new())
        .await
        .unwrap();
    assert!(alice_front.non_dominated.is_empty());

    let peers = RecordPeerComparisonHandler::new(
        ws.repos.decision_maker_repository(),
        ws.repos.peer_comparison_repository(),
    );
    for (master, target, score) in [(alice, bob, 3), (bob, alice, 1)] {
        peers
            .handle(RecordPeerComparisonCommand { master, target, score }, CommandMetadata::new())
            .await
            .unwrap();
    }
    let priorities = AggregatePrioritiesHandler::new(
        ws.repos.decision_maker_repository(),
        ws.repos.peer_comparison_repository(),
        ws.publisher(),
    )
    .handle(CommandMetadata::new())
    .await
    .unwrap();
    assert_eq!(priorities[0].priority, 37);
    assert_eq!(priorities[1].priority, 63);

    let ranking = ws.ranking().handle().await.unwrap();
    let order: Vec<(AlternativeId, i64, usize)> =
        ranking.iter().map(|r| (r.alternative_id, r.score, r.position)).collect();
    assert_eq!(order, vec![(a, 163, 1), (b, 100, 2), (c, 37, 3)]);
    assert!(ws.bus.has_event("panel.priorities_aggregated.v1"));
    assert_eq!(ws.bus.events_of_type("judgment.recorded.v1").len(), 6);
}

#[tokio::test]
async fn removing_an_alternative_cascades_before_rescoring() {
    let ws = Workspace::new();
    let alice = ws.decision_maker("Alice").await;
    let a = ws.alternative("A").await;
    let b = ws.alternative("B").await;
    let c = ws.alternative("C").await;
    ws.judge(alice, &[(a, b, Outcome::Greater), (c, a, Outcome::Greater), (c, b, Outcome::Greater)])
        .await;
    ws.scorer()
        .handle(ScoreDecisionMakerCommand { decision_maker_id: alice }, CommandMetadata::new())
        .await
        .unwrap();

    RemoveAlternativeHandler::new(
        ws.repos.alternative_repository(),
        ws.repos.profile_repository(),
        ws.repos.judgment_repository(),
        ws.repos.result_repository(),
    )
    .handle(RemoveAlternativeCommand { alternative_id: c }, CommandMetadata::new())
    .await
    .unwrap();

    let stored = ws.repos.judgment_repository().find_by_decision_maker(&alice).await.unwrap();
    assert!(stored.iter().all(|j| j.first != c && j.second != c));
    assert!(PreferenceRelation::from_judgments(alice, &stored).is_complete(&[a, b]));

    let rescored = ws
        .scorer()
        .with_strict_completeness(true)
        .handle(ScoreDecisionMakerCommand { decision_maker_id: alice }, CommandMetadata::new())
        .await
        .unwrap();
    assert_eq!(rescored.winners, vec![a]);
    let results = ws.repos.result_repository().list().await.unwrap();
    assert_eq!(results.len(), 2);
}
