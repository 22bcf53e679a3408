//! Strategy configuration — an immutable value object validated once.
//!
//! The defaults below are the calibrated parameter set for the weekly
//! composite strategy. Callers may deserialize a partial override file over
//! the defaults (every field carries `#[serde(default = ...)]`), mirroring
//! the defaults-plus-overrides merge the strategy has always used.
//!
//! The four signal weights are deliberately NOT validated to sum to 1.0.
//! Misconfigured weights let the composite score exceed its nominal [0,1]
//! range; downstream thresholds are calibrated against the raw weighted sum,
//! so no implicit normalization is applied.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Named numeric parameters of the strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Long moving-average period (primary trend).
    pub ma_long: usize,
    /// Short moving-average period (trend strength, stop anchor).
    pub ma_short: usize,
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    /// Period of the trend-strength proxy (see `indicators::trend`).
    pub adx_period: usize,
    pub atr_period: usize,
    /// ATR multiple for the protective stop.
    pub atr_multiplier: f64,
    /// Minimum composite score for a non-zero position.
    pub signal_threshold: f64,
    pub weak_signal: f64,
    pub strong_signal: f64,
    pub very_strong_signal: f64,
    pub trend_weight: f64,
    pub slope_weight: f64,
    pub momentum_weight: f64,
    pub environment_weight: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            ma_long: 45,
            ma_short: 20,
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            adx_period: 14,
            atr_period: 14,
            atr_multiplier: 2.5,
            signal_threshold: 0.5,
            weak_signal: 0.65,
            strong_signal: 0.75,
            very_strong_signal: 0.9,
            trend_weight: 0.4,
            slope_weight: 0.25,
            momentum_weight: 0.2,
            environment_weight: 0.15,
        }
    }
}

impl StrategyConfig {
    /// Validate the configuration. Called once at strategy construction.
    ///
    /// Rejects zero-length periods and a non-positive or non-finite ATR
    /// multiplier. Thresholds and weights are accepted as-is.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("ma_long", self.ma_long),
            ("ma_short", self.ma_short),
            ("rsi_period", self.rsi_period),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
            ("adx_period", self.adx_period),
            ("atr_period", self.atr_period),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroPeriod { name });
            }
        }
        if !self.atr_multiplier.is_finite() || self.atr_multiplier <= 0.0 {
            return Err(ConfigError::InvalidAtrMultiplier(self.atr_multiplier));
        }
        Ok(())
    }

    /// Bars before this index never carry a stop price, regardless of
    /// indicator availability.
    pub fn stop_warmup(&self) -> usize {
        self.ma_long.max(self.adx_period)
    }
}
