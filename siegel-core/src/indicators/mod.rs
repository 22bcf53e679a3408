//! Raw technical indicators over the weekly price series.
//!
//! Every indicator is a pure series function: `&[Option<f64>]` (or bars)
//! in, input-length `Vec<Option<f64>>` out. `None` marks a value that is
//! undefined at that bar — insufficient trailing history, an absent input,
//! or a degenerate denominator — and is never replaced with zero.
//!
//! [`compute`] assembles all columns into [`IndicatorRow`]s; the independent
//! columns could be computed concurrently, but a sequential pass is already
//! well under a millisecond for a few thousand bars.

pub mod atr;
pub mod ema;
pub mod macd;
pub mod rolling;
pub mod rsi;
pub mod trend;

pub use atr::{atr, true_range};
pub use ema::ema;
pub use macd::{macd, MacdSeries};
pub use rolling::{diff_ratio, rolling_max, rolling_mean, rolling_min};
pub use rsi::rsi;
pub use trend::{ma_slope, relative_volatility, trend_strength};

use crate::config::StrategyConfig;
use crate::domain::{IndicatorRow, WeeklyBar};

/// Compute every indicator column and zip them into per-bar rows.
///
/// The output has exactly the input's length and order; the input is never
/// mutated.
pub fn compute(bars: &[WeeklyBar], config: &StrategyConfig) -> Vec<IndicatorRow> {
    let closes: Vec<Option<f64>> = bars.iter().map(|b| b.close).collect();

    let ma_long = rolling_mean(&closes, config.ma_long);
    let ma_short = rolling_mean(&closes, config.ma_short);
    let slope = ma_slope(&ma_short);
    let rsi_series = rsi(&closes, config.rsi_period);
    let macd_series = macd(&closes, config.macd_fast, config.macd_slow, config.macd_signal);
    let atr_series = atr(bars, config.atr_period);
    let strength = trend_strength(&ma_short, config.adx_period);
    let rel_vol = relative_volatility(&atr_series, &closes);

    bars.iter()
        .enumerate()
        .map(|(i, bar)| IndicatorRow {
            bar: bar.clone(),
            ma_long: ma_long[i],
            ma_short: ma_short[i],
            ma_slope: slope[i],
            rsi: rsi_series[i],
            macd: macd_series.line[i],
            macd_signal: macd_series.signal[i],
            macd_hist: macd_series.histogram[i],
            atr: atr_series[i],
            trend_strength: strength[i],
            rel_volatility: rel_vol[i],
        })
        .collect()
}

/// Wrap plain values in `Some` for series tests.
#[cfg(test)]
pub fn opts(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().map(|&v| Some(v)).collect()
}

/// Create synthetic weekly bars from close prices for testing.
///
/// Generates plausible OHLV: open = prev close (or close on the first bar),
/// high = max(open, close) + 1.0, low = min(open, close) - 1.0.
#[cfg(test)]
pub fn make_bars(closes: &[f64]) -> Vec<WeeklyBar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            WeeklyBar {
                date: base_date + chrono::Duration::weeks(i as i64),
                open: Some(open),
                high: Some(open.max(close) + 1.0),
                low: Some(open.min(close) - 1.0),
                close: Some(close),
                volume: Some(1_000.0),
            }
        })
        .collect()
}

/// Create synthetic weekly bars with explicit OHLC tuples.
#[cfg(test)]
pub fn make_ohlc_bars(data: &[(f64, f64, f64, f64)]) -> Vec<WeeklyBar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    data.iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| WeeklyBar {
            date: base_date + chrono::Duration::weeks(i as i64),
            open: Some(open),
            high: Some(high),
            low: Some(low),
            close: Some(close),
            volume: Some(1_000.0),
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
