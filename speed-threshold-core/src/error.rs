//! Error types raised by the calculation engine.

use thiserror::Error;

/// Failure of a single calculation. Terminal for the call that raised it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    #[error("{field} must be a number (got {raw:?})")]
    Parse { field: String, raw: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CalcError {
    pub(crate) fn parse(field: impl Into<String>, raw: &str) -> Self {
        Self::Parse {
            field: field.into(),
            raw: raw.to_string(),
        }
    }

    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// A parsed value that violates one of the documented input constraints.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Total turns must be at least 1 (got {0}).")]
    TurnCount(i64),
    #[error("Target actions must be at least 1 (got {0}).")]
    TargetActionCount(i64),
    #[error("Recurring trigger count cannot be negative (got {0}).")]
    NegativeTriggerCount(i64),
    #[error("Exactly {expected} custom advance values are required (got {actual}).")]
    CustomSlotCount { expected: usize, actual: usize },
    #[error("Unknown mode {0:?}; expected \"Forgotten Hall\" or \"Anomaly Arbitration\".")]
    UnknownMode(String),
    #[error("Total turns {0} is too large to compute an action value.")]
    ActionValueOverflow(i64),
    #[error("Speed threshold is out of range for the given inputs.")]
    ThresholdOutOfRange,
}

/// Errors raised when a ruleset violates its invariants.
#[derive(Debug, Error, PartialEq)]
pub enum RulesError {
    #[error("rules JSON invalid: {0}")]
    Json(String),
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} cannot be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("custom_slots must be at least 1")]
    NoCustomSlots,
}

impl From<serde_json::Error> for RulesError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
