//! Common error types used across the workspace.
//!
//! Each layer defines typed errors and converts via `#[from]` — no `String`
//! variants on the card path.

/// Top-level error for the card widget.
#[derive(Debug, thiserror::Error)]
pub enum CardError {
    /// The configuration handed to `configure` was rejected.
    #[error("invalid card configuration")]
    Config(#[from] ConfigError),

    /// A snapshot was applied before the widget was configured.
    #[error("widget is not configured; call configure first")]
    NotConfigured,
}

/// Validation failures for [`CardConfig`](crate::config::CardConfig).
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The required `entity` field was missing or empty.
    #[error("card configuration requires a non-empty entity")]
    EmptyEntity,
}

/// A device-reported mode spelling that matches no known operating mode.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown operating mode: {value}")]
pub struct UnknownModeError {
    /// The spelling the device reported.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_config_error_into_card_error() {
        let err: CardError = ConfigError::EmptyEntity.into();
        assert!(matches!(err, CardError::Config(ConfigError::EmptyEntity)));
    }

    #[test]
    fn should_describe_not_configured() {
        let err = CardError::NotConfigured;
        assert_eq!(
            err.to_string(),
            "widget is not configured; call configure first"
        );
    }

    #[test]
    fn should_include_spelling_in_unknown_mode_message() {
        let err = UnknownModeError {
            value: "WHIRL".to_string(),
        };
        assert_eq!(err.to_string(), "unknown operating mode: WHIRL");
    }
}
