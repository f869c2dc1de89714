//! Form state held by the presentation layer.
//!
//! Every field is kept as the text a user typed; nothing is interpreted until
//! [`FormState::submit`] runs the parse-then-validate pipeline.

use speed_threshold_core::{CalcError, Mode, SpeedBreakdown, SpeedInputs, SpeedRules};

pub const DEFAULT_MODE: &str = "Forgotten Hall";
pub const DEFAULT_TURNS: &str = "1";
pub const DEFAULT_ACTIONS: &str = "2";
pub const DEFAULT_TRIGGERS: &str = "0";
pub const DEFAULT_CUSTOM: &str = "0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub mode: String,
    pub turns: String,
    pub actions: String,
    pub triggers: String,
    pub bonus: bool,
    pub custom: Vec<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::with_slots(speed_threshold_core::constants::CUSTOM_ADVANCE_SLOTS)
    }
}

impl FormState {
    /// Blank form with `slots` custom advance fields.
    #[must_use]
    pub fn with_slots(slots: usize) -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            turns: DEFAULT_TURNS.to_string(),
            actions: DEFAULT_ACTIONS.to_string(),
            triggers: DEFAULT_TRIGGERS.to_string(),
            bonus: false,
            custom: vec![DEFAULT_CUSTOM.to_string(); slots],
        }
    }

    /// Restore every field to its default, keeping the slot count.
    pub fn reset(&mut self) {
        *self = Self::with_slots(self.custom.len());
    }

    /// Fill custom slots in order. Entries beyond the form's slots are kept
    /// so the engine can reject the oversized list.
    pub fn fill_custom<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (idx, value) in values.into_iter().enumerate() {
            let value = value.into();
            if let Some(slot) = self.custom.get_mut(idx) {
                *slot = value;
            } else {
                self.custom.push(value);
            }
        }
    }

    /// Parse the typed fields into engine inputs.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Parse`] naming the first integer field that is not
    /// a whole number, or a validation error for an unknown mode.
    pub fn to_inputs(&self) -> Result<SpeedInputs, CalcError> {
        let mode: Mode = self.mode.trim().parse()?;
        Ok(SpeedInputs {
            target_action_count: parse_count("Target actions", &self.actions)?,
            mode,
            turn_count: parse_count("Total turns", &self.turns)?,
            recurring_trigger_count: parse_count("Recurring triggers", &self.triggers)?,
            one_time_bonus_present: self.bonus,
            custom_advance_values: self.custom.clone(),
        })
    }

    /// Run the full calculation for the current field values.
    ///
    /// # Errors
    ///
    /// Propagates any parse or validation failure unchanged.
    pub fn submit(&self, rules: &SpeedRules) -> Result<SpeedBreakdown, CalcError> {
        let inputs = self.to_inputs()?;
        log::debug!("submitting {inputs:?}");
        rules.compute_breakdown(&inputs)
    }
}

fn parse_count(field: &str, raw: &str) -> Result<i64, CalcError> {
    raw.trim().parse().map_err(|_| CalcError::Parse {
        field: field.to_string(),
        raw: raw.to_string(),
    })
}

/// Line shown for a successful calculation.
#[must_use]
pub fn result_message(threshold: i64) -> String {
    format!("Required Speed to achieve the desired actions: {threshold}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use speed_threshold_core::ValidationError;

    #[test]
    fn defaults_compute_standard_hall_threshold() {
        let form = FormState::default();
        assert_eq!(form.custom.len(), 6);
        let breakdown = form.submit(&SpeedRules::default()).unwrap();
        assert_eq!(breakdown.mode, Mode::StandardHall);
        assert_eq!(breakdown.threshold, 134);
        assert_eq!(
            result_message(breakdown.threshold),
            "Required Speed to achieve the desired actions: 134"
        );
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = FormState::default();
        form.mode = "Anomaly Arbitration".to_string();
        form.turns = "4".to_string();
        form.bonus = true;
        form.fill_custom(["24", "10"]);
        form.reset();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn fill_custom_overwrites_in_order_and_keeps_overflow() {
        let mut form = FormState::default();
        form.fill_custom(["24", "", "0.1"]);
        assert_eq!(form.custom, vec!["24", "", "0.1", "0", "0", "0"]);

        form.fill_custom(vec!["1"; 7]);
        assert_eq!(form.custom.len(), 7);
        assert_eq!(
            form.submit(&SpeedRules::default()),
            Err(CalcError::Validation(ValidationError::CustomSlotCount {
                expected: 6,
                actual: 7,
            }))
        );
    }

    #[test]
    fn non_numeric_counts_name_their_field() {
        let form = FormState {
            turns: "two".to_string(),
            ..FormState::default()
        };
        assert_eq!(
            form.to_inputs(),
            Err(CalcError::Parse {
                field: "Total turns".to_string(),
                raw: "two".to_string(),
            })
        );

        let form = FormState {
            actions: "1.5".to_string(),
            ..FormState::default()
        };
        assert!(form.to_inputs().unwrap_err().is_parse());
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let form = FormState {
            mode: "Pure Fiction".to_string(),
            ..FormState::default()
        };
        assert_eq!(
            form.to_inputs(),
            Err(CalcError::Validation(ValidationError::UnknownMode(
                "Pure Fiction".to_string()
            )))
        );
    }

    #[test]
    fn counts_tolerate_surrounding_whitespace() {
        let form = FormState {
            actions: " 3 ".to_string(),
            triggers: "1 ".to_string(),
            ..FormState::default()
        };
        let inputs = form.to_inputs().unwrap();
        assert_eq!(inputs.target_action_count, 3);
        assert_eq!(inputs.recurring_trigger_count, 1);
    }
}
