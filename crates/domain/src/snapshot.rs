//! Sensor readings as exposed by the host's state snapshot.
//!
//! The snapshot itself is owned by the host; the widget only ever borrows
//! it for the duration of a single render. These types describe the shape
//! of one entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// UTC timestamp attached by the host when an entry was last refreshed.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// A single typed reading value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadingValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl std::fmt::Display for ReadingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(value) => value.fmt(f),
            Self::Float(value) => value.fmt(f),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// One entry of the host snapshot.
///
/// `state` is `None` when the host knows the sensor but holds no reading
/// for it yet; the card renders such entries the same as absent ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorValue {
    /// Current reading.
    pub state: Option<ReadingValue>,
    /// When the host last refreshed this entry.
    #[serde(default)]
    pub last_updated: Option<Timestamp>,
}

impl SensorValue {
    /// An entry holding a textual reading.
    #[must_use]
    pub fn text(state: impl Into<String>) -> Self {
        Self {
            state: Some(ReadingValue::Text(state.into())),
            last_updated: None,
        }
    }

    /// An entry holding a numeric reading.
    #[must_use]
    pub fn number(state: f64) -> Self {
        Self {
            state: Some(ReadingValue::Float(state)),
            last_updated: None,
        }
    }

    /// An entry the host knows about but has no reading for.
    #[must_use]
    pub fn unset() -> Self {
        Self {
            state: None,
            last_updated: None,
        }
    }

    /// Attach the host's refresh stamp.
    #[must_use]
    pub fn stamped(mut self, at: Timestamp) -> Self {
        self.last_updated = Some(at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_float_reading_without_trailing_zeroes() {
        assert_eq!(ReadingValue::Float(21.5).to_string(), "21.5");
        assert_eq!(ReadingValue::Float(20.0).to_string(), "20");
    }

    #[test]
    fn should_display_text_reading_verbatim() {
        assert_eq!(ReadingValue::Text("NORMAL".to_string()).to_string(), "NORMAL");
    }

    #[test]
    fn should_deserialize_number_as_numeric_variant() {
        let value: ReadingValue = serde_json::from_str("21.5").unwrap();
        assert_eq!(value, ReadingValue::Float(21.5));
    }

    #[test]
    fn should_deserialize_integer_as_int_variant() {
        let value: ReadingValue = serde_json::from_str("60").unwrap();
        assert_eq!(value, ReadingValue::Int(60));
    }

    #[test]
    fn should_deserialize_string_as_text_variant() {
        let value: ReadingValue = serde_json::from_str("\"21.5\"").unwrap();
        assert_eq!(value, ReadingValue::Text("21.5".to_string()));
    }

    #[test]
    fn should_build_unset_entry_without_reading() {
        let value = SensorValue::unset();
        assert_eq!(value.state, None);
    }

    #[test]
    fn should_attach_refresh_stamp() {
        let at = now();
        let value = SensorValue::number(12.0).stamped(at);
        assert_eq!(value.last_updated, Some(at));
    }

    #[test]
    fn should_roundtrip_entry_through_serde_json() {
        let value = SensorValue::text("NORMAL").stamped(now());
        let json = serde_json::to_string(&value).unwrap();
        let parsed: SensorValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);
    }
}
