//! Operating modes of a ventilation unit.
//!
//! Devices report the active mode as free text in their own panel
//! language; the known spellings are mapped to a canonical mode here.
//! The card itself shows the reported text verbatim — this type exists
//! for simulators and for hosts that normalize device spellings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownModeError;

/// Canonical operating mode of a ventilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingMode {
    Away,
    #[default]
    Normal,
    Intensive,
    Boost,
}

impl OperatingMode {
    /// All modes, in increasing airflow order.
    pub const ALL: [Self; 4] = [Self::Away, Self::Normal, Self::Intensive, Self::Boost];

    /// The spelling a device panel reports for this mode.
    #[must_use]
    pub fn device_spelling(self) -> &'static str {
        match self {
            Self::Away => "AWAY",
            Self::Normal => "NORMAL",
            Self::Intensive => "INTENSIVE",
            Self::Boost => "BOOST",
        }
    }
}

impl FromStr for OperatingMode {
    type Err = UnknownModeError;

    /// Parse a device-reported spelling, in any of the panel languages
    /// units ship with.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AWAY" | "NIEOBECNO\u{15a}\u{106}" | "NIEOBECNOSC" => Ok(Self::Away),
            "NORMAL" | "NORMALNY" => Ok(Self::Normal),
            "INTENSIVE" | "INTENSYWNY" => Ok(Self::Intensive),
            "BOOST" | "TURBO" => Ok(Self::Boost),
            _ => Err(UnknownModeError {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Away => f.write_str("away"),
            Self::Normal => f.write_str("normal"),
            Self::Intensive => f.write_str("intensive"),
            Self::Boost => f.write_str("boost"),
        }
    }
}
