//! Combines action value and advance into the required speed.

use serde::{Deserialize, Serialize};

use crate::advance::parse_advance_field;
use crate::constants::LOG_NON_POSITIVE_THRESHOLD;
use crate::error::{CalcError, ValidationError};
use crate::mode::Mode;
use crate::numbers::{ceil_f64_to_i64, i64_to_f64};
use crate::rules::SpeedRules;

/// Already-typed inputs of a single calculation. Custom advances stay raw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedInputs {
    pub target_action_count: i64,
    pub mode: Mode,
    pub turn_count: i64,
    pub recurring_trigger_count: i64,
    pub one_time_bonus_present: bool,
    pub custom_advance_values: Vec<String>,
}

/// Threshold plus the intermediate values it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedBreakdown {
    pub mode: Mode,
    pub target_action_count: i64,
    pub action_value: i64,
    pub custom_advances: Vec<f64>,
    pub advance_total: f64,
    pub threshold: i64,
}

impl SpeedBreakdown {
    /// Zero or negative thresholds mean the advances alone already cover
    /// the requested actions.
    #[must_use]
    pub const fn is_non_positive(&self) -> bool {
        self.threshold <= 0
    }
}

impl SpeedRules {
    /// Run the full calculation and keep the intermediate values.
    ///
    /// Validation order: target actions, turns, trigger count, custom slot
    /// count, then each custom entry in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`CalcError`] encountered; no partial result is produced.
    pub fn compute_breakdown(&self, inputs: &SpeedInputs) -> Result<SpeedBreakdown, CalcError> {
        if inputs.target_action_count < 1 {
            return Err(ValidationError::TargetActionCount(inputs.target_action_count).into());
        }
        let action_value = self.total_action_value(inputs.mode, inputs.turn_count)?;

        if inputs.recurring_trigger_count < 0 {
            return Err(
                ValidationError::NegativeTriggerCount(inputs.recurring_trigger_count).into(),
            );
        }
        self.ensure_custom_slots(inputs.custom_advance_values.len())?;
        let custom_advances = inputs
            .custom_advance_values
            .iter()
            .enumerate()
            .map(|(idx, raw)| parse_advance_field(&format!("custom advance {}", idx + 1), raw))
            .collect::<Result<Vec<_>, _>>()?;

        let advance_total = self.total_advance_value(
            inputs.recurring_trigger_count,
            inputs.one_time_bonus_present,
            &custom_advances,
        )?;

        let required = self.action_gauge * i64_to_f64(inputs.target_action_count);
        let threshold = ceil_f64_to_i64((required - advance_total) / i64_to_f64(action_value))
            .ok_or(ValidationError::ThresholdOutOfRange)?;
        if threshold <= 0 {
            log::warn!(
                "{LOG_NON_POSITIVE_THRESHOLD}: advance {advance_total} covers {} action(s)",
                inputs.target_action_count
            );
        }

        Ok(SpeedBreakdown {
            mode: inputs.mode,
            target_action_count: inputs.target_action_count,
            action_value,
            custom_advances,
            advance_total,
            threshold,
        })
    }

    /// # Errors
    ///
    /// See [`SpeedRules::compute_breakdown`].
    pub fn compute_threshold(&self, inputs: &SpeedInputs) -> Result<i64, CalcError> {
        self.compute_breakdown(inputs).map(|b| b.threshold)
    }
}

/// Breakdown under the built-in rules.
///
/// # Errors
///
/// See [`SpeedRules::compute_breakdown`].
pub fn compute_speed_breakdown<S: AsRef<str>>(
    target_action_count: i64,
    mode: Mode,
    turn_count: i64,
    recurring_trigger_count: i64,
    one_time_bonus_present: bool,
    custom_advance_values_raw: &[S],
) -> Result<SpeedBreakdown, CalcError> {
    let inputs = SpeedInputs {
        target_action_count,
        mode,
        turn_count,
        recurring_trigger_count,
        one_time_bonus_present,
        custom_advance_values: custom_advance_values_raw
            .iter()
            .map(|raw| raw.as_ref().to_string())
            .collect(),
    };
    SpeedRules::default().compute_breakdown(&inputs)
}

/// Minimum speed needed to reach `target_action_count` actions.
///
/// # Errors
///
/// Returns [`CalcError::Validation`] for out-of-range counts or a custom list
/// that is not six entries long, and [`CalcError::Parse`] for an unreadable
/// custom entry.
pub fn compute_speed_threshold<S: AsRef<str>>(
    target_action_count: i64,
    mode: Mode,
    turn_count: i64,
    recurring_trigger_count: i64,
    one_time_bonus_present: bool,
    custom_advance_values_raw: &[S],
) -> Result<i64, CalcError> {
    compute_speed_breakdown(
        target_action_count,
        mode,
        turn_count,
        recurring_trigger_count,
        one_time_bonus_present,
        custom_advance_values_raw,
    )
    .map(|b| b.threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbers::approx_eq;

    const ZEROES: [&str; 6] = ["0"; 6];

    #[test]
    fn standard_hall_two_actions_first_turn() {
        let breakdown = compute_speed_breakdown(2, Mode::StandardHall, 1, 0, false, &ZEROES).unwrap();
        assert_eq!(breakdown.action_value, 150);
        assert!(approx_eq(breakdown.advance_total, 0.0));
        assert_eq!(breakdown.threshold, 134);
    }

    #[test]
    fn anomaly_arbitration_two_actions_first_turn() {
        assert_eq!(
            compute_speed_threshold(2, Mode::AnomalyArbitration, 1, 0, false, &ZEROES),
            Ok(67)
        );
    }

    #[test]
    fn advances_lower_the_threshold() {
        // (20000 - 9000) / 150 = 73.33
        assert_eq!(
            compute_speed_threshold(2, Mode::StandardHall, 1, 2, true, &ZEROES),
            Ok(74)
        );
        // (10000 - 2400) / 250 = 30.4
        let custom = ["24", "", "0", "0", "0", "0"];
        assert_eq!(
            compute_speed_threshold(1, Mode::StandardHall, 2, 0, false, &custom),
            Ok(31)
        );
    }

    #[test]
    fn exact_division_is_not_rounded_up() {
        // 10000 / 250 = 40
        assert_eq!(
            compute_speed_threshold(1, Mode::StandardHall, 2, 0, false, &ZEROES),
            Ok(40)
        );
    }

    #[test]
    fn covered_targets_yield_non_positive_thresholds() {
        let breakdown = compute_speed_breakdown(1, Mode::StandardHall, 1, 4, true, &ZEROES).unwrap();
        // (10000 - 14000) / 150 = -26.67
        assert_eq!(breakdown.threshold, -26);
        assert!(breakdown.is_non_positive());
    }

    #[test]
    fn target_is_validated_before_turns() {
        assert_eq!(
            compute_speed_threshold(0, Mode::StandardHall, 0, 0, false, &ZEROES),
            Err(CalcError::Validation(ValidationError::TargetActionCount(0)))
        );
    }

    #[test]
    fn slot_count_is_checked_before_parsing() {
        let short = ["abc", "0", "0", "0", "0"];
        assert_eq!(
            compute_speed_threshold(2, Mode::StandardHall, 1, 0, false, &short),
            Err(CalcError::Validation(ValidationError::CustomSlotCount {
                expected: 6,
                actual: 5,
            }))
        );
    }

    #[test]
    fn first_bad_custom_entry_is_reported() {
        let custom = ["0", "x", "y", "0", "0", "0"];
        assert_eq!(
            compute_speed_threshold(2, Mode::StandardHall, 1, 0, false, &custom),
            Err(CalcError::Parse {
                field: "custom advance 2".to_string(),
                raw: "x".to_string(),
            })
        );
    }

    #[test]
    fn rules_method_matches_free_function() {
        let inputs = SpeedInputs {
            target_action_count: 3,
            mode: Mode::AnomalyArbitration,
            turn_count: 2,
            recurring_trigger_count: 1,
            one_time_bonus_present: false,
            custom_advance_values: ZEROES.iter().map(ToString::to_string).collect(),
        };
        let rules = SpeedRules::default();
        assert_eq!(
            rules.compute_threshold(&inputs),
            compute_speed_threshold(3, Mode::AnomalyArbitration, 2, 1, false, &ZEROES)
        );
    }
}
