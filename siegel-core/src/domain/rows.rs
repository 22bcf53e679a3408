//! Enriched row types, one per pipeline stage.
//!
//! Each stage wraps the previous stage's row and adds its own columns, so a
//! `PositionRow` carries the complete per-bar picture: raw bar, indicators,
//! sub-signals, composite score, position tier, and stop price. Rows are
//! derived and immutable; every run rebuilds them from scratch.

use crate::domain::WeeklyBar;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bar plus its raw technical indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub bar: WeeklyBar,
    pub ma_long: Option<f64>,
    pub ma_short: Option<f64>,
    /// 4-bar relative change of the short MA.
    pub ma_slope: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_hist: Option<f64>,
    pub atr: Option<f64>,
    /// Bespoke trend-strength proxy (see `indicators::trend`), not the
    /// canonical directional index.
    pub trend_strength: Option<f64>,
    /// ATR divided by close, as a percentage.
    pub rel_volatility: Option<f64>,
}

/// An indicator row plus the four bounded sub-signals and their weighted
/// composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRow {
    pub indicator: IndicatorRow,
    /// Exactly 0.0 or 1.0 whenever defined.
    pub trend_signal: Option<f64>,
    pub slope_signal: Option<f64>,
    pub momentum_signal: Option<f64>,
    pub environment_signal: Option<f64>,
    pub composite_signal: Option<f64>,
}

/// A signal row plus the chosen position tier and protective stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRow {
    pub signal: SignalRow,
    /// One of {0.0, 0.8, 1.0, 1.2, 1.4} whenever defined.
    pub position: Option<f64>,
    pub stop_loss: Option<f64>,
}

impl IndicatorRow {
    pub fn date(&self) -> NaiveDate {
        self.bar.date
    }

    pub fn close(&self) -> Option<f64> {
        self.bar.close
    }
}

impl SignalRow {
    pub fn date(&self) -> NaiveDate {
        self.indicator.date()
    }

    pub fn close(&self) -> Option<f64> {
        self.indicator.close()
    }
}

impl PositionRow {
    pub fn date(&self) -> NaiveDate {
        self.signal.date()
    }

    pub fn close(&self) -> Option<f64> {
        self.signal.close()
    }

    pub fn composite_signal(&self) -> Option<f64> {
        self.signal.composite_signal
    }
}
