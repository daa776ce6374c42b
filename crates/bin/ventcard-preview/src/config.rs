//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `ventcard.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Card settings handed to the widget.
    pub card: CardSection,
    /// Preview loop settings.
    pub preview: PreviewConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// The card's own settings: an entity and a language, nothing else.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CardSection {
    /// Fully-qualified key of the unit's mode sensor.
    pub entity: String,
    /// Label language code (`en`, `pl`); unset means English.
    pub language: Option<String>,
}

/// Refresh cadence of the preview loop.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Milliseconds between host ticks.
    pub interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `ventcard.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("ventcard.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("VENTCARD_ENTITY") {
            self.card.entity = val;
        }
        if let Ok(val) = std::env::var("VENTCARD_LANG") {
            self.card.language = Some(val);
        }
        if let Ok(val) = std::env::var("VENTCARD_INTERVAL_MS") {
            if let Ok(interval) = val.parse() {
                self.preview.interval_ms = interval;
            }
        }
        if let Ok(val) = std::env::var("VENTCARD_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.card.entity.is_empty() {
            return Err(ConfigError::Validation(
                "card.entity must be non-empty".to_string(),
            ));
        }
        if self.preview.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "preview.interval_ms must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CardSection {
    fn default() -> Self {
        Self {
            entity: "sensor.ahu1_mode".to_string(),
            language: None,
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "ventcard=info,ventcard_preview=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.card.entity, "sensor.ahu1_mode");
        assert_eq!(config.card.language, None);
        assert_eq!(config.preview.interval_ms, 1000);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.card.entity, "sensor.ahu1_mode");
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [card]
            entity = 'sensor.attic_unit_mode'
            language = 'pl'

            [preview]
            interval_ms = 250

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.card.entity, "sensor.attic_unit_mode");
        assert_eq!(config.card.language.as_deref(), Some("pl"));
        assert_eq!(config.preview.interval_ms, 250);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [card]
            entity = 'sensor.unit_mode'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.card.entity, "sensor.unit_mode");
        assert_eq!(config.preview.interval_ms, 1000);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.card.entity, "sensor.ahu1_mode");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_empty_entity() {
        let mut config = Config::default();
        config.card.entity = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_zero_interval() {
        let mut config = Config::default();
        config.preview.interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }
}
