//! Error types for configuration and run validation.
//!
//! Per-bar "undefined" values are not errors — they travel as `None` through
//! the row types. Only an empty or malformed input series aborts a run, and
//! malformed input is reported before any computation begins.

use thiserror::Error;

/// Errors raised when validating a [`crate::StrategyConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be at least 1")]
    ZeroPeriod { name: &'static str },

    #[error("atr_multiplier must be positive and finite (got {0})")]
    InvalidAtrMultiplier(f64),
}

/// Errors raised when validating an input price series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrategyError {
    #[error("price series is empty")]
    EmptyInput,

    #[error("malformed input at bar {index}: {reason}")]
    MalformedInput { index: usize, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::ZeroPeriod { name: "ma_long" }.to_string(),
            "ma_long must be at least 1"
        );
        assert_eq!(StrategyError::EmptyInput.to_string(), "price series is empty");
        let err = StrategyError::MalformedInput {
            index: 3,
            reason: "non-increasing date".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed input at bar 3: non-increasing date"
        );
    }
}
