//! Localized label text for the card's captioned slots.

use serde::{Deserialize, Serialize};

use crate::metric::Metric;

/// Languages the card ships labels for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pl,
}

impl Language {
    /// Resolve a host-provided language code.
    ///
    /// Absent or unrecognized codes fall back to English, so rendering
    /// never fails on exotic host locales.
    #[must_use]
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("pl") => Self::Pl,
            _ => Self::En,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => f.write_str("en"),
            Self::Pl => f.write_str("pl"),
        }
    }
}

/// Static label set for one language — one caption per captioned slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub supply: &'static str,
    pub extract: &'static str,
    pub outdoor: &'static str,
    pub fan: &'static str,
    pub filter: &'static str,
    pub power: &'static str,
    pub recovery: &'static str,
}

const EN: Labels = Labels {
    supply: "Supply",
    extract: "Extract",
    outdoor: "Outdoor",
    fan: "Fan",
    filter: "Filter",
    power: "Power",
    recovery: "Recovery",
};

const PL: Labels = Labels {
    supply: "Nawiew",
    extract: "Wywiew",
    outdoor: "Zewn.",
    fan: "Wentylator",
    filter: "Filtr",
    power: "Moc",
    recovery: "Odzysk",
};

impl Labels {
    /// Label set for the given language. Constant for the process lifetime.
    #[must_use]
    pub fn for_language(language: Language) -> &'static Self {
        match language {
            Language::En => &EN,
            Language::Pl => &PL,
        }
    }

    /// Caption for a metric's slot. The mode slot carries no caption.
    #[must_use]
    pub fn for_metric(&self, metric: Metric) -> Option<&'static str> {
        match metric {
            Metric::Mode => None,
            Metric::SupplyTemperature => Some(self.supply),
            Metric::ExtractTemperature => Some(self.extract),
            Metric::OutdoorTemperature => Some(self.outdoor),
            Metric::SupplyFan => Some(self.fan),
            Metric::FilterContamination => Some(self.filter),
            Metric::PowerConsumption => Some(self.power),
            Metric::HeatRecoveryPower => Some(self.recovery),
        }
    }
}
