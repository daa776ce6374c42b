//! # ventcard-adapter-virtual
//!
//! Virtual/demo ventilation unit that produces simulated snapshots for
//! testing and preview purposes.
//!
//! ## Provided state
//!
//! | Sensor key | Behaviour |
//! |------------|-----------|
//! | `sensor.<stem>_mode` | Cycles through the operating modes |
//! | `sensor.<stem>_supply_temperature` | Drifts around 21.5 °C |
//! | `sensor.<stem>_extract_temperature` | Drifts around 22.1 °C |
//! | `sensor.<stem>_outdoor_temperature` | Drifts around 5 °C |
//! | `sensor.<stem>_supply_fan` | Fixed per mode |
//! | `sensor.<stem>_filter_contamination` | Creeps upward, warns past the threshold |
//! | `sensor.<stem>_power_consumption` | Fixed per mode |
//! | `sensor.<stem>_heat_recovery_power` | Scales with the fan |
//!
//! The simulation is a pure function of its tick counter, so repeated
//! runs produce identical readings.
//!
//! ## Dependency rule
//!
//! Depends on `ventcard-app` (port traits) and `ventcard-domain` only.

mod unit;

use std::collections::HashMap;

use ventcard_app::ports::StateView;
use ventcard_domain::snapshot::SensorValue;

pub use unit::VirtualUnit;

/// In-memory snapshot implementing the [`StateView`] port.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryStateStore {
    sensors: HashMap<String, SensorValue>,
}

impl InMemoryStateStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace one entry.
    pub fn insert(&mut self, key: impl Into<String>, value: SensorValue) {
        self.sensors.insert(key.into(), value);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }
}

impl StateView for InMemoryStateStore {
    fn sensor(&self, key: &str) -> Option<&SensorValue> {
        self.sensors.get(key)
    }
}
