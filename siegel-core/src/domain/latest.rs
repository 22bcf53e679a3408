//! Latest-signal snapshot handed to the reporting collaborator.

use crate::stats::StatsRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable label for the most recent position tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalType {
    VeryStrongBuy,
    StrongBuy,
    Buy,
    WeakBuy,
    Sell,
}

impl SignalType {
    /// Derive the label from a position tier.
    ///
    /// Evaluated top-down over the tier set {1.4, 1.2, 1.0, 0.8}; any
    /// non-positive position reads as a sell.
    pub fn from_position(position: f64) -> Self {
        if position > 0.0 {
            if position >= 1.4 {
                Self::VeryStrongBuy
            } else if position >= 1.2 {
                Self::StrongBuy
            } else if position >= 1.0 {
                Self::Buy
            } else {
                Self::WeakBuy
            }
        } else {
            Self::Sell
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryStrongBuy => "very-strong-buy",
            Self::StrongBuy => "strong-buy",
            Self::Buy => "buy",
            Self::WeakBuy => "weak-buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the last enriched row plus run statistics.
///
/// `signal_type` is `None` only when the composite signal (and hence the
/// position) is still undefined at the end of the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestSignal {
    pub date: NaiveDate,
    pub close: Option<f64>,
    pub composite_signal: Option<f64>,
    pub position: Option<f64>,
    pub signal_type: Option<SignalType>,
    pub stop_loss: Option<f64>,
    pub ma_long: Option<f64>,
    pub ma_short: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub trend_strength: Option<f64>,
    pub stats: StatsRecord,
}
