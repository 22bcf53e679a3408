//! WeeklyBar — the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLCV bar for one calendar week, keyed by its (unique, strictly
/// increasing) bar date.
///
/// Numeric fields are `Option<f64>`: `None` marks a value the upstream data
/// pipeline could not supply, and it propagates as undefined through every
/// downstream computation. Present values must be finite — run validation
/// rejects NaN and infinities before any computation starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyBar {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

impl WeeklyBar {
    /// Named numeric fields, for validation and diagnostics.
    pub fn fields(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
        ]
    }

    /// Returns the name of the first present-but-non-finite field, if any.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        self.fields()
            .into_iter()
            .find(|(_, v)| matches!(v, Some(x) if !x.is_finite()))
            .map(|(name, _)| name)
    }
}
