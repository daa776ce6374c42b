//! Port definitions — capabilities the hosting dashboard must provide.
//!
//! Ports are the boundary between the widget and the host. The widget
//! renders synchronously on the host's refresh tick, so the lookup is
//! synchronous too: no IO, no locks, no suspension on this path.

use std::collections::HashMap;

use ventcard_domain::snapshot::SensorValue;

/// Read-only view of the host's current sensor state.
///
/// The host owns the snapshot; the widget borrows it for the duration of
/// one render and must not retain it. Missing keys are a normal outcome
/// and degrade to a placeholder, never an error.
pub trait StateView {
    /// Look up a sensor entry by its fully-qualified key.
    fn sensor(&self, key: &str) -> Option<&SensorValue>;
}

impl StateView for HashMap<String, SensorValue> {
    fn sensor(&self, key: &str) -> Option<&SensorValue> {
        self.get(key)
    }
}
