//! Game modes with distinct action value baselines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Shown to players as "Forgotten Hall".
    #[default]
    StandardHall,
    AnomalyArbitration,
}

impl Mode {
    pub const ALL: [Self; 2] = [Self::StandardHall, Self::AnomalyArbitration];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StandardHall => "standard-hall",
            Self::AnomalyArbitration => "anomaly-arbitration",
        }
    }

    /// Label as it appears in the in-game mode picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StandardHall => "Forgotten Hall",
            Self::AnomalyArbitration => "Anomaly Arbitration",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    /// Accepts ids, labels and variant names, ignoring case and separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "standardhall" | "forgottenhall" => Ok(Self::StandardHall),
            "anomalyarbitration" => Ok(Self::AnomalyArbitration),
            _ => Err(ValidationError::UnknownMode(s.to_string())),
        }
    }
}

impl From<Mode> for String {
    fn from(value: Mode) -> Self {
        value.as_str().to_string()
    }
}
