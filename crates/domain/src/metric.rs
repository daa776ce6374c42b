//! The eight telemetry channels shown on the card, with their display units.

use crate::snapshot::ReadingValue;

/// Placeholder shown when a reading is missing or unset.
pub const PLACEHOLDER: &str = "?";

/// Unit marker appended to a formatted reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    None,
    Celsius,
    Percent,
    Watts,
}

impl Unit {
    /// Text appended after the reading, including the placeholder.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Celsius => "\u{b0}C",
            Self::Percent => "%",
            Self::Watts => "W",
        }
    }
}

/// One telemetry channel of a ventilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Mode,
    SupplyTemperature,
    ExtractTemperature,
    OutdoorTemperature,
    SupplyFan,
    FilterContamination,
    PowerConsumption,
    HeatRecoveryPower,
}

impl Metric {
    /// All metrics, in card order.
    pub const ALL: [Self; 8] = [
        Self::Mode,
        Self::SupplyTemperature,
        Self::ExtractTemperature,
        Self::OutdoorTemperature,
        Self::SupplyFan,
        Self::FilterContamination,
        Self::PowerConsumption,
        Self::HeatRecoveryPower,
    ];

    /// Sensor-key suffix identifying this metric within a unit's key family.
    #[must_use]
    pub fn key_suffix(self) -> &'static str {
        match self {
            Self::Mode => "mode",
            Self::SupplyTemperature => "supply_temperature",
            Self::ExtractTemperature => "extract_temperature",
            Self::OutdoorTemperature => "outdoor_temperature",
            Self::SupplyFan => "supply_fan",
            Self::FilterContamination => "filter_contamination",
            Self::PowerConsumption => "power_consumption",
            Self::HeatRecoveryPower => "heat_recovery_power",
        }
    }

    /// Display unit for this metric. The mode is shown verbatim.
    #[must_use]
    pub fn unit(self) -> Unit {
        match self {
            Self::Mode => Unit::None,
            Self::SupplyTemperature | Self::ExtractTemperature | Self::OutdoorTemperature => {
                Unit::Celsius
            }
            Self::SupplyFan | Self::FilterContamination => Unit::Percent,
            Self::PowerConsumption | Self::HeatRecoveryPower => Unit::Watts,
        }
    }

    /// Format a reading for display: the reading followed by the unit
    /// suffix. Missing or unset readings degrade to [`PLACEHOLDER`] with
    /// the suffix still appended.
    #[must_use]
    pub fn format(self, reading: Option<&ReadingValue>) -> String {
        match reading {
            Some(value) => format!("{value}{}", self.unit().suffix()),
            None => format!("{PLACEHOLDER}{}", self.unit().suffix()),
        }
    }
}
