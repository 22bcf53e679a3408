//! Protective stop prices.
//!
//! Per bar: `stop = max(close − atr_multiplier × ATR, short MA)` — the ATR
//! leg adapts to volatility, the short MA acts as a technical floor.
//!
//! Bars before index `max(ma_long, adx_period)` never carry a stop, even
//! when the underlying indicators happen to be computable earlier. The gate
//! is an index comparison, not an availability check.

use crate::config::StrategyConfig;
use crate::domain::SignalRow;

/// Compute the stop price column for the full series.
pub fn stop_losses(rows: &[SignalRow], config: &StrategyConfig) -> Vec<Option<f64>> {
    let warmup = config.stop_warmup();

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            if i < warmup {
                return None;
            }
            match (row.close(), row.indicator.atr, row.indicator.ma_short) {
                (Some(close), Some(atr), Some(ma_short)) => {
                    Some((close - config.atr_multiplier * atr).max(ma_short))
                }
                _ => None,
            }
        })
        .collect()
}
