//! Card configuration — the immutable record supplied once by the host.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Static configuration for one status card instance.
///
/// The host hands this over exactly once, before the first render. The only
/// required field is the fully-qualified key of the unit's primary (mode)
/// sensor; every other sensor key is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Fully-qualified key of the unit's mode sensor
    /// (e.g. `sensor.ahu1_mode`).
    pub entity: String,
}

impl CardConfig {
    /// Create a configuration for the given primary sensor key.
    #[must_use]
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyEntity`] when `entity` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entity.is_empty() {
            return Err(ConfigError::EmptyEntity);
        }
        Ok(())
    }
}
