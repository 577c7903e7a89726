//! Engine error type shared by every computation and command handler.

use thiserror::Error;

use super::{AlternativeId, CriterionId, DecisionMakerId, DomainError, ErrorCode, MarkId, ValidationError};

/// Errors produced by the decision-aggregation engine.
///
/// Computation failures are fatal to the single computation that raised them
/// and are never coerced into default values.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Criterion {0} has no optimal direction")]
    DirectionUndefined(CriterionId),

    #[error("Normalized value {value} for mark {mark} is outside 0..=100")]
    NormalizedOutOfRange { mark: MarkId, value: i64 },

    #[error("Profile assigns more than one mark to criterion {0}")]
    DuplicateCriterion(CriterionId),

    #[error("Invalid pair: {0}")]
    InvalidPair(String),

    #[error("Alternative not found: {0}")]
    UnknownAlternative(AlternativeId),

    #[error("Criterion not found: {0}")]
    UnknownCriterion(CriterionId),

    #[error("Mark not found: {0}")]
    UnknownMark(MarkId),

    #[error("Decision maker not found: {0}")]
    UnknownDecisionMaker(DecisionMakerId),

    #[error("Alternative {alternative} has no normalized mark for criterion {criterion}")]
    MissingNormalizedMark {
        alternative: AlternativeId,
        criterion: CriterionId,
    },

    #[error("Priority is undefined: comparison matrix is degenerate")]
    UndefinedPriority,

    #[error("Arithmetic overflow during {0}")]
    Overflow(&'static str),

    #[error("Preference relation is incomplete: {missing} pair(s) without a judgment")]
    IncompleteRelation { missing: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Infrastructure(#[from] DomainError),
}

impl EngineError {
    /// Creates an invalid pair error.
    pub fn invalid_pair(reason: impl Into<String>) -> Self {
        EngineError::InvalidPair(reason.into())
    }

    /// Creates a division by zero error.
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        EngineError::DivisionByZero(context.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::DivisionByZero(_) => ErrorCode::DivisionByZero,
            EngineError::DirectionUndefined(_) => ErrorCode::DirectionUndefined,
            EngineError::NormalizedOutOfRange { .. } => ErrorCode::ValidationFailed,
            EngineError::DuplicateCriterion(_) => ErrorCode::ValidationFailed,
            EngineError::InvalidPair(_) => ErrorCode::InvalidPair,
            EngineError::UnknownAlternative(_) => ErrorCode::AlternativeNotFound,
            EngineError::UnknownCriterion(_) => ErrorCode::CriterionNotFound,
            EngineError::UnknownMark(_) => ErrorCode::MarkNotFound,
            EngineError::UnknownDecisionMaker(_) => ErrorCode::DecisionMakerNotFound,
            EngineError::MissingNormalizedMark { .. } => ErrorCode::ValidationFailed,
            EngineError::UndefinedPriority => ErrorCode::UndefinedPriority,
            EngineError::Overflow(_) => ErrorCode::ArithmeticOverflow,
            EngineError::IncompleteRelation { .. } => ErrorCode::IncompleteRelation,
            EngineError::Validation(_) => ErrorCode::ValidationFailed,
            EngineError::Infrastructure(err) => err.code,
        }
    }
}
