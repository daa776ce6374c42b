//! Sensor-key derivation — one configured key fans out to a unit's whole
//! key family.

use crate::metric::Metric;

/// Prefix shared by every sensor key in the host's state store.
pub const KEY_PREFIX: &str = "sensor.";

/// Key suffix of the primary (mode) sensor the card is configured with.
pub const MODE_SUFFIX: &str = "_mode";

/// The lookup keys for one ventilation unit.
///
/// Derived deterministically from the configured primary key and cheap
/// enough to recompute on every render; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorKeySet {
    stem: String,
}

impl SensorKeySet {
    /// Derive the key set from the configured primary sensor key.
    ///
    /// The stem is obtained by removing the first occurrence of
    /// `"sensor."` and then the first occurrence of `"_mode"` — not
    /// anchored, not global, matching how hosts name these sensors.
    #[must_use]
    pub fn derive(entity: &str) -> Self {
        let stem = entity
            .replacen(KEY_PREFIX, "", 1)
            .replacen(MODE_SUFFIX, "", 1);
        Self { stem }
    }

    /// The device-specific stem shared by the unit's sensors.
    #[must_use]
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Fully-qualified key for one metric.
    #[must_use]
    pub fn key(&self, metric: Metric) -> String {
        format!("{KEY_PREFIX}{}_{}", self.stem, metric.key_suffix())
    }

    /// All eight keys, in card order.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        Metric::ALL.into_iter().map(|metric| self.key(metric))
    }
}
