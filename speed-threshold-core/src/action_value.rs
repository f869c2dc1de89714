//! Per-action budget as a function of mode and elapsed turns.

use crate::error::{CalcError, ValidationError};
use crate::mode::Mode;
use crate::rules::SpeedRules;

impl SpeedRules {
    /// Action value available across `turn_count` turns in `mode`.
    ///
    /// The first turn is worth the mode's base value; each further turn adds
    /// `per_extra_turn`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `turn_count < 1` or the result overflows.
    pub fn total_action_value(&self, mode: Mode, turn_count: i64) -> Result<i64, CalcError> {
        if turn_count < 1 {
            return Err(ValidationError::TurnCount(turn_count).into());
        }
        let effective_turns = turn_count - 1;
        let value = self
            .per_extra_turn
            .checked_mul(effective_turns)
            .and_then(|extra| extra.checked_add(self.base_action_value(mode)))
            .ok_or(ValidationError::ActionValueOverflow(turn_count))?;
        log::debug!("action value for {mode} over {turn_count} turn(s): {value}");
        Ok(value)
    }
}

/// [`SpeedRules::total_action_value`] under the built-in rules.
///
/// # Errors
///
/// Returns a validation error if `turn_count < 1`.
pub fn total_action_value(mode: Mode, turn_count: i64) -> Result<i64, CalcError> {
    SpeedRules::default().total_action_value(mode, turn_count)
}
