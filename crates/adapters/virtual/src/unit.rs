//! Simulated ventilation unit — deterministic telemetry from a tick counter.

use ventcard_domain::key::SensorKeySet;
use ventcard_domain::metric::Metric;
use ventcard_domain::mode::OperatingMode;
use ventcard_domain::snapshot::{ReadingValue, SensorValue, now};

use crate::InMemoryStateStore;

/// Contamination level above which a real unit asks for a filter change.
pub const FILTER_WARNING_THRESHOLD: f64 = 80.0;

/// Ticks spent in each operating mode before cycling to the next.
const MODE_CYCLE_TICKS: u64 = 30;

/// Contamination added per tick.
const FILTER_CREEP_PER_TICK: f64 = 0.1;

const SUPPLY_BASE: f64 = 21.5;
const EXTRACT_BASE: f64 = 22.1;
const OUTDOOR_BASE: f64 = 5.0;

/// A simulated ventilation unit.
///
/// All readings are a pure function of the tick counter, so a unit that
/// has been ticked `n` times always reports the same values.
#[derive(Debug, Clone)]
pub struct VirtualUnit {
    keys: SensorKeySet,
    step: u64,
    filter_contamination: f64,
}

impl VirtualUnit {
    /// Create a unit for the given key stem (a bare stem such as `ahu1`
    /// or the configured primary key both work).
    #[must_use]
    pub fn new(stem: &str) -> Self {
        Self {
            keys: SensorKeySet::derive(stem),
            step: 0,
            filter_contamination: 10.0,
        }
    }

    /// The key family this unit publishes under.
    #[must_use]
    pub fn keys(&self) -> &SensorKeySet {
        &self.keys
    }

    /// Number of ticks applied so far.
    #[must_use]
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Active operating mode for the current tick.
    #[must_use]
    pub fn mode(&self) -> OperatingMode {
        let cycle = (self.step / MODE_CYCLE_TICKS) as usize;
        OperatingMode::ALL[cycle % OperatingMode::ALL.len()]
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) {
        self.step += 1;
        let before = self.filter_contamination;
        self.filter_contamination = (before + FILTER_CREEP_PER_TICK).min(100.0);
        if before < FILTER_WARNING_THRESHOLD && self.filter_contamination >= FILTER_WARNING_THRESHOLD
        {
            tracing::warn!(
                stem = self.keys.stem(),
                contamination = self.filter_contamination,
                "filter contamination above replacement threshold"
            );
        }
    }

    /// Publish the current readings as a host-style snapshot.
    #[must_use]
    pub fn snapshot(&self) -> InMemoryStateStore {
        let at = now();
        let mut store = InMemoryStateStore::new();
        store.insert(
            self.keys.key(Metric::Mode),
            SensorValue::text(self.mode().device_spelling()).stamped(at),
        );
        store.insert(
            self.keys.key(Metric::SupplyTemperature),
            SensorValue::number(round_tenth(SUPPLY_BASE + self.wobble(7))).stamped(at),
        );
        store.insert(
            self.keys.key(Metric::ExtractTemperature),
            SensorValue::number(round_tenth(EXTRACT_BASE + self.wobble(11))).stamped(at),
        );
        store.insert(
            self.keys.key(Metric::OutdoorTemperature),
            SensorValue::number(round_tenth(OUTDOOR_BASE + self.wobble(13))).stamped(at),
        );
        store.insert(
            self.keys.key(Metric::SupplyFan),
            SensorValue {
                state: Some(ReadingValue::Int(self.fan_percent())),
                last_updated: Some(at),
            },
        );
        store.insert(
            self.keys.key(Metric::FilterContamination),
            SensorValue::number(round_tenth(self.filter_contamination)).stamped(at),
        );
        store.insert(
            self.keys.key(Metric::PowerConsumption),
            SensorValue {
                state: Some(ReadingValue::Int(self.power_watts())),
                last_updated: Some(at),
            },
        );
        store.insert(
            self.keys.key(Metric::HeatRecoveryPower),
            SensorValue {
                state: Some(ReadingValue::Int(self.recovery_watts())),
                last_updated: Some(at),
            },
        );
        store
    }

    /// Triangle wave in the range ±0.25 with the given period in ticks.
    fn wobble(&self, period: u64) -> f64 {
        let phase = (self.step % period) as f64 / (period - 1) as f64;
        (phase - 0.5).abs() - 0.25
    }

    fn fan_percent(&self) -> i64 {
        match self.mode() {
            OperatingMode::Away => 20,
            OperatingMode::Normal => 60,
            OperatingMode::Intensive => 80,
            OperatingMode::Boost => 100,
        }
    }

    fn power_watts(&self) -> i64 {
        match self.mode() {
            OperatingMode::Away => 45,
            OperatingMode::Normal => 120,
            OperatingMode::Intensive => 210,
            OperatingMode::Boost => 320,
        }
    }

    fn recovery_watts(&self) -> i64 {
        self.fan_percent() * 10
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use ventcard_app::ports::StateView;

    use super::*;

    #[test]
    fn should_publish_exactly_the_eight_family_keys() {
        let unit = VirtualUnit::new("ahu1");
        let snapshot = unit.snapshot();
        assert_eq!(snapshot.len(), 8);
        for key in unit.keys().keys() {
            assert!(snapshot.sensor(&key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn should_accept_primary_key_as_stem() {
        let unit = VirtualUnit::new("sensor.ahu1_mode");
        assert_eq!(unit.keys().stem(), "ahu1");
    }

    #[test]
    fn should_report_identical_readings_for_identical_tick_counts() {
        let mut a = VirtualUnit::new("ahu1");
        let mut b = VirtualUnit::new("ahu1");
        for _ in 0..17 {
            a.tick();
            b.tick();
        }

        for key in a.keys().keys() {
            let left = a.snapshot().sensor(&key).map(|v| v.state.clone());
            let right = b.snapshot().sensor(&key).map(|v| v.state.clone());
            assert_eq!(left, right, "diverged on {key}");
        }
    }

    #[test]
    fn should_start_in_away_mode_and_cycle() {
        let mut unit = VirtualUnit::new("ahu1");
        assert_eq!(unit.mode(), OperatingMode::Away);
        for _ in 0..MODE_CYCLE_TICKS {
            unit.tick();
        }
        assert_eq!(unit.mode(), OperatingMode::Normal);
    }

    #[test]
    fn should_report_device_spelling_for_mode() {
        let unit = VirtualUnit::new("ahu1");
        let snapshot = unit.snapshot();
        let value = snapshot.sensor("sensor.ahu1_mode").unwrap();
        assert_eq!(value.state, Some(ReadingValue::Text("AWAY".to_string())));
    }

    #[test]
    fn should_stamp_every_entry() {
        let unit = VirtualUnit::new("ahu1");
        let snapshot = unit.snapshot();
        for key in unit.keys().keys() {
            assert!(snapshot.sensor(&key).unwrap().last_updated.is_some());
        }
    }

    #[test]
    fn should_cap_filter_contamination_at_one_hundred() {
        let mut unit = VirtualUnit::new("ahu1");
        for _ in 0..2000 {
            unit.tick();
        }
        let snapshot = unit.snapshot();
        let value = snapshot
            .sensor("sensor.ahu1_filter_contamination")
            .unwrap();
        assert_eq!(value.state, Some(ReadingValue::Float(100.0)));
    }
}
