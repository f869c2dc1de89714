//! Tunable ruleset behind the formulas.
use serde::{Deserialize, Serialize};

use crate::constants::{
    ACTION_GAUGE, ACTION_VALUE_PER_EXTRA_TURN, ANOMALY_ARBITRATION_BASE_ACTION_VALUE,
    CUSTOM_ADVANCE_SLOTS, ONE_TIME_BONUS_ADVANCE, RECURRING_TRIGGER_ADVANCE,
    STANDARD_HALL_BASE_ACTION_VALUE,
};
use crate::error::RulesError;
use crate::mode::Mode;
use crate::numbers::i64_to_f64;

const DEFAULT_RULES_DATA: &str = include_str!("../data/rules.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedRules {
    #[serde(default = "default_standard_hall_base")]
    pub standard_hall_base: i64,
    #[serde(default = "default_anomaly_arbitration_base")]
    pub anomaly_arbitration_base: i64,
    #[serde(default = "default_per_extra_turn")]
    pub per_extra_turn: i64,
    #[serde(default = "default_recurring_trigger_advance")]
    pub recurring_trigger_advance: f64,
    #[serde(default = "default_one_time_bonus_advance")]
    pub one_time_bonus_advance: f64,
    #[serde(default = "default_action_gauge")]
    pub action_gauge: f64,
    #[serde(default = "default_custom_slots")]
    pub custom_slots: usize,
}

impl Default for SpeedRules {
    fn default() -> Self {
        Self {
            standard_hall_base: default_standard_hall_base(),
            anomaly_arbitration_base: default_anomaly_arbitration_base(),
            per_extra_turn: default_per_extra_turn(),
            recurring_trigger_advance: default_recurring_trigger_advance(),
            one_time_bonus_advance: default_one_time_bonus_advance(),
            action_gauge: default_action_gauge(),
            custom_slots: default_custom_slots(),
        }
    }
}

impl SpeedRules {
    /// Built-in ruleset shipped with the crate.
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_RULES_DATA).unwrap_or_default()
    }

    /// Parse and validate a ruleset. Missing fields fall back to the built-in values.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if the JSON is malformed or the ruleset is invalid.
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check invariants the formulas depend on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), RulesError> {
        for (field, value) in [
            ("standard_hall_base", self.standard_hall_base),
            ("anomaly_arbitration_base", self.anomaly_arbitration_base),
        ] {
            if value <= 0 {
                return Err(RulesError::NonPositive {
                    field,
                    value: i64_to_f64(value),
                });
            }
        }
        if self.per_extra_turn < 0 {
            return Err(RulesError::Negative {
                field: "per_extra_turn",
                value: i64_to_f64(self.per_extra_turn),
            });
        }
        for (field, value) in [
            ("recurring_trigger_advance", self.recurring_trigger_advance),
            ("one_time_bonus_advance", self.one_time_bonus_advance),
            ("action_gauge", self.action_gauge),
        ] {
            if !value.is_finite() {
                return Err(RulesError::NonFinite { field });
            }
        }
        if self.action_gauge <= 0.0 {
            return Err(RulesError::NonPositive {
                field: "action_gauge",
                value: self.action_gauge,
            });
        }
        if self.custom_slots == 0 {
            return Err(RulesError::NoCustomSlots);
        }
        Ok(())
    }

    /// Action value of the first turn in `mode`.
    #[must_use]
    pub const fn base_action_value(&self, mode: Mode) -> i64 {
        match mode {
            Mode::StandardHall => self.standard_hall_base,
            Mode::AnomalyArbitration => self.anomaly_arbitration_base,
        }
    }
}

const fn default_standard_hall_base() -> i64 {
    STANDARD_HALL_BASE_ACTION_VALUE
}

const fn default_anomaly_arbitration_base() -> i64 {
    ANOMALY_ARBITRATION_BASE_ACTION_VALUE
}

const fn default_per_extra_turn() -> i64 {
    ACTION_VALUE_PER_EXTRA_TURN
}

const fn default_recurring_trigger_advance() -> f64 {
    RECURRING_TRIGGER_ADVANCE
}

const fn default_one_time_bonus_advance() -> f64 {
    ONE_TIME_BONUS_ADVANCE
}

const fn default_action_gauge() -> f64 {
    ACTION_GAUGE
}

const fn default_custom_slots() -> usize {
    CUSTOM_ADVANCE_SLOTS
}
