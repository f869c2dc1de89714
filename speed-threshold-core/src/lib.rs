//! Speed Threshold Engine
//!
//! Stateless formulas that turn a mode, a turn count and a set of advance
//! contributions into the minimum speed needed for a target number of
//! actions. This crate has no UI or platform-specific dependencies; front
//! ends collect raw field text and call [`compute_speed_threshold`] or
//! [`SpeedRules::compute_breakdown`].

pub mod action_value;
pub mod advance;
pub mod constants;
pub mod error;
pub mod mode;
pub mod numbers;
pub mod rules;
pub mod threshold;

// Re-export commonly used types
pub use action_value::total_action_value;
pub use advance::{parse_advance_field, parse_advance_value, total_advance_value};
pub use error::{CalcError, RulesError, ValidationError};
pub use mode::Mode;
pub use rules::SpeedRules;
pub use threshold::{
    SpeedBreakdown, SpeedInputs, compute_speed_breakdown, compute_speed_threshold,
};
