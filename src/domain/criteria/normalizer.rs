//! Normalizer - rescales raw marks of one criterion to a common 0-100 range.

use serde::{Deserialize, Serialize};

use super::{Criterion, Direction, Mark};
use crate::domain::foundation::{EngineError, MarkId, Percentage};

/// Scale that every normalized mark is expressed in.
pub const NORMALIZED_SCALE: i64 = 100;

/// The normalized value computed for one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedMark {
    pub mark_id: MarkId,
    pub value: Percentage,
}

/// Batch normalization of all marks under a criterion.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes every mark of `criterion`.
    ///
    /// # Algorithm
    /// - Maximize: `value * 100 / max(values)`
    /// - Minimize: `min(values) * 100 / value`
    ///
    /// Integer division truncates, so the extremal mark is exactly 100 and
    /// everything else lands below it.
    ///
    /// # Errors
    /// - `DirectionUndefined` if the criterion has no direction
    /// - `DivisionByZero` if the maximum is 0 (maximize) or any value is 0 (minimize)
    /// - `NormalizedOutOfRange` if non-positive inputs push a result outside 0..=100
    ///
    /// # Edge Cases
    /// - No marks: returns an empty Vec
    /// - Marks belonging to other criteria are ignored
    pub fn normalize(criterion: &Criterion, marks: &[Mark]) -> Result<Vec<NormalizedMark>, EngineError> {
        let direction = criterion
            .direction
            .ok_or(EngineError::DirectionUndefined(criterion.id))?;

        let own: Vec<&Mark> = marks
            .iter()
            .filter(|m| m.criterion_id == criterion.id)
            .collect();

        let values = own.iter().map(|m| m.numeric_value);
        let extremum = match direction {
            Direction::Maximize => values.max(),
            Direction::Minimize => values.min(),
        };
        let Some(extremum) = extremum else {
            return Ok(Vec::new());
        };

        own.into_iter()
            .map(|mark| {
                let raw = match direction {
                    Direction::Maximize => Self::scaled_ratio(mark.numeric_value, extremum)?,
                    Direction::Minimize => Self::scaled_ratio(extremum, mark.numeric_value)?,
                };
                let value = Percentage::try_new(raw).map_err(|_| EngineError::NormalizedOutOfRange {
                    mark: mark.id,
                    value: raw,
                })?;
                Ok(NormalizedMark { mark_id: mark.id, value })
            })
            .collect()
    }

    /// Writes normalized values back onto the marks they were computed for.
    ///
    /// Marks without a computed value are left untouched.
    pub fn apply(marks: &mut [Mark], normalized: &[NormalizedMark]) {
        for mark in marks.iter_mut() {
            if let Some(n) = normalized.iter().find(|n| n.mark_id == mark.id) {
                mark.normalized = Some(n.value);
            }
        }
    }

    /// Computes `numerator * 100 / denominator` with explicit failure modes.
    fn scaled_ratio(numerator: i64, denominator: i64) -> Result<i64, EngineError> {
        if denominator == 0 {
            return Err(EngineError::division_by_zero(
                "normalization denominator is zero",
            ));
        }
        numerator
            .checked_mul(NORMALIZED_SCALE)
            .map(|scaled| scaled / denominator)
            .ok_or(EngineError::Overflow("normalization"))
    }
}
