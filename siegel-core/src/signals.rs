//! Signal composition — four bounded sub-signals and their weighted sum.
//!
//! Sub-signals are normalized into [0,1]:
//! - trend: binary, close above/below the long MA
//! - slope: short-MA slope, min-max normalized against its own trailing
//!   52-bar range
//! - momentum: half RSI/100, half normalized MACD histogram
//! - environment: trend strength plus inverted relative volatility — the
//!   environment rewards low volatility, not high
//!
//! A degenerate normalization window (rolling max == rolling min) leaves the
//! sub-signal undefined for that bar, and any undefined operand leaves the
//! composite undefined. The weights are applied as configured; nothing
//! re-normalizes them.

use crate::config::StrategyConfig;
use crate::domain::{IndicatorRow, SignalRow};
use crate::indicators::{rolling_max, rolling_min};

/// Trailing window, in bars, for min-max normalization of the slope, MACD
/// histogram, and relative-volatility series. One year of weekly bars.
pub const NORMALIZATION_WINDOW: usize = 52;

/// Min-max normalize each value against its trailing window, clipped to
/// [0,1].
///
/// Undefined when the value or either extreme is undefined, or when the
/// window range is zero.
pub fn normalize_clip(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let mins = rolling_min(values, window);
    let maxs = rolling_max(values, window);

    values
        .iter()
        .zip(mins.iter().zip(maxs.iter()))
        .map(|(v, (min, max))| match (v, min, max) {
            (Some(v), Some(min), Some(max)) if max != min => {
                Some(((v - min) / (max - min)).clamp(0.0, 1.0))
            }
            _ => None,
        })
        .collect()
}

/// Derive the four sub-signals and the composite score for every row.
pub fn compose(rows: Vec<IndicatorRow>, config: &StrategyConfig) -> Vec<SignalRow> {
    let slope_norm = normalize_clip(
        &rows.iter().map(|r| r.ma_slope).collect::<Vec<_>>(),
        NORMALIZATION_WINDOW,
    );
    let macd_norm = normalize_clip(
        &rows.iter().map(|r| r.macd_hist).collect::<Vec<_>>(),
        NORMALIZATION_WINDOW,
    );
    let vol_norm = normalize_clip(
        &rows.iter().map(|r| r.rel_volatility).collect::<Vec<_>>(),
        NORMALIZATION_WINDOW,
    );

    rows.into_iter()
        .enumerate()
        .map(|(i, indicator)| {
            let trend_signal = match (indicator.close(), indicator.ma_long) {
                (Some(close), Some(ma)) => Some(if close > ma { 1.0 } else { 0.0 }),
                _ => None,
            };

            let slope_signal = slope_norm[i];

            let momentum_signal = match (indicator.rsi, macd_norm[i]) {
                (Some(rsi), Some(macd)) => Some(0.5 * (rsi / 100.0) + 0.5 * macd),
                _ => None,
            };

            let environment_signal = match (indicator.trend_strength, vol_norm[i]) {
                (Some(strength), Some(vol)) => {
                    Some(0.6 * (strength / 100.0).clamp(0.0, 1.0) + 0.4 * (1.0 - vol))
                }
                _ => None,
            };

            let composite_signal = match (
                trend_signal,
                slope_signal,
                momentum_signal,
                environment_signal,
            ) {
                (Some(trend), Some(slope), Some(momentum), Some(environment)) => Some(
                    config.trend_weight * trend
                        + config.slope_weight * slope
                        + config.momentum_weight * momentum
                        + config.environment_weight * environment,
                ),
                _ => None,
            };

            SignalRow {
                indicator,
                trend_signal,
                slope_signal,
                momentum_signal,
                environment_signal,
                composite_signal,
            }
        })
        .collect()
}
