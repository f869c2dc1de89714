//! Advance contributions: normalizing raw entries and summing them.

use crate::constants::{PERCENT_CUTOFF, PERCENT_DIVISOR};
use crate::error::{CalcError, ValidationError};
use crate::numbers::i64_to_f64;
use crate::rules::SpeedRules;

const ADVANCE_FIELD: &str = "advance value";

/// Normalize a raw advance entry into a fraction.
///
/// Blank input is zero. Magnitudes of one or more are read as percentages
/// (`"24"` is `0.24`); smaller values are taken as already fractional.
///
/// # Errors
///
/// Returns [`CalcError::Parse`] if the input is not a finite number.
pub fn parse_advance_value(raw: &str) -> Result<f64, CalcError> {
    parse_advance_field(ADVANCE_FIELD, raw)
}

/// [`parse_advance_value`] with the field name reported on failure.
///
/// # Errors
///
/// Returns [`CalcError::Parse`] naming `field` if the input is not a finite number.
pub fn parse_advance_field(field: &str, raw: &str) -> Result<f64, CalcError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| CalcError::parse(field, raw))?;
    if value.abs() >= PERCENT_CUTOFF {
        Ok(value / PERCENT_DIVISOR)
    } else {
        Ok(value)
    }
}

impl SpeedRules {
    /// Combined advance from recurring triggers, the one-time bonus and the
    /// custom contributions, scaled to the action gauge.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `recurring_trigger_count` is negative or
    /// `custom` does not hold exactly `custom_slots` entries.
    pub fn total_advance_value(
        &self,
        recurring_trigger_count: i64,
        one_time_bonus_present: bool,
        custom: &[f64],
    ) -> Result<f64, CalcError> {
        if recurring_trigger_count < 0 {
            return Err(ValidationError::NegativeTriggerCount(recurring_trigger_count).into());
        }
        self.ensure_custom_slots(custom.len())?;

        let recurring_total = i64_to_f64(recurring_trigger_count) * self.recurring_trigger_advance;
        let bonus_total = if one_time_bonus_present {
            self.one_time_bonus_advance
        } else {
            0.0
        };
        let custom_total: f64 = custom.iter().sum();
        let combined = (recurring_total + bonus_total + custom_total) * self.action_gauge;
        log::debug!(
            "advance: recurring {recurring_total} + bonus {bonus_total} + custom {custom_total} -> {combined}"
        );
        Ok(combined)
    }

    pub(crate) fn ensure_custom_slots(&self, actual: usize) -> Result<(), ValidationError> {
        if actual == self.custom_slots {
            Ok(())
        } else {
            Err(ValidationError::CustomSlotCount {
                expected: self.custom_slots,
                actual,
            })
        }
    }
}

/// [`SpeedRules::total_advance_value`] under the built-in rules.
///
/// # Errors
///
/// Returns a validation error on a negative trigger count or a custom slice
/// that is not exactly six entries long.
pub fn total_advance_value(
    recurring_trigger_count: i64,
    one_time_bonus_present: bool,
    custom: &[f64],
) -> Result<f64, CalcError> {
    SpeedRules::default().total_advance_value(
        recurring_trigger_count,
        one_time_bonus_present,
        custom,
    )
}
