//! Centralized formula constants for the speed threshold engine.
//!
//! These values define the built-in ruleset. `data/rules.json` mirrors them
//! and the two are checked against each other in tests.

// Action value ------------------------------------------------------------
pub const STANDARD_HALL_BASE_ACTION_VALUE: i64 = 150;
pub const ANOMALY_ARBITRATION_BASE_ACTION_VALUE: i64 = 300;
pub const ACTION_VALUE_PER_EXTRA_TURN: i64 = 100;

// Advance -----------------------------------------------------------------
pub const RECURRING_TRIGGER_ADVANCE: f64 = 0.25;
pub const ONE_TIME_BONUS_ADVANCE: f64 = 0.40;
/// Distance a unit must cover to take one action.
pub const ACTION_GAUGE: f64 = 10_000.0;
pub const CUSTOM_ADVANCE_SLOTS: usize = 6;

// Normalization -----------------------------------------------------------
/// Raw advance values at or above this magnitude are read as percentages.
pub const PERCENT_CUTOFF: f64 = 1.0;
pub const PERCENT_DIVISOR: f64 = 100.0;

// Logging keys -------------------------------------------------------------
pub(crate) const LOG_NON_POSITIVE_THRESHOLD: &str = "threshold.non-positive";
