//! Low-level error types.
//!
//! `ValidationError` rejects malformed input values. `DomainError` is what
//! storage and event ports report.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// A rejected input value, such as a blank name or an out-of-range score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Machine-readable category of a [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationFailed,
    InvalidPair,

    AlternativeNotFound,
    CriterionNotFound,
    MarkNotFound,
    DecisionMakerNotFound,

    DivisionByZero,
    DirectionUndefined,
    UndefinedPriority,
    IncompleteRelation,
    ArithmeticOverflow,

    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidPair => "INVALID_PAIR",
            ErrorCode::AlternativeNotFound => "ALTERNATIVE_NOT_FOUND",
            ErrorCode::CriterionNotFound => "CRITERION_NOT_FOUND",
            ErrorCode::MarkNotFound => "MARK_NOT_FOUND",
            ErrorCode::DecisionMakerNotFound => "DECISION_MAKER_NOT_FOUND",
            ErrorCode::DivisionByZero => "DIVISION_BY_ZERO",
            ErrorCode::DirectionUndefined => "DIRECTION_UNDEFINED",
            ErrorCode::UndefinedPriority => "UNDEFINED_PRIORITY",
            ErrorCode::IncompleteRelation => "INCOMPLETE_RELATION",
            ErrorCode::ArithmeticOverflow => "ARITHMETIC_OVERFLOW",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Error reported across a port, with a code and free-form context.
///
/// Adapters return this type; engine code converts it into
/// [`EngineError`](super::EngineError) at the application boundary.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Attaches a key/value pair of context.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
