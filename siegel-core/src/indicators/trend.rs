//! Short-MA slope and the trend-strength proxy.
//!
//! The trend-strength measure is NOT the canonical Average Directional
//! Index. It is this strategy's bespoke proxy — the rolling mean of the
//! absolute 2-bar relative change of the short MA, scaled to percent — and
//! the environment-signal thresholds downstream are calibrated against this
//! proxy's numeric range. Keep the formula as is.

use crate::indicators::rolling::{diff_ratio, rolling_mean};

/// Bars between the two short-MA samples used for the slope.
pub const SLOPE_LAG: usize = 4;

/// Bars between the two short-MA samples used for the strength proxy.
pub const STRENGTH_LAG: usize = 2;

/// 4-bar relative change of the short MA.
///
/// Undefined when either MA sample is undefined or the base sample is zero.
pub fn ma_slope(ma_short: &[Option<f64>]) -> Vec<Option<f64>> {
    diff_ratio(ma_short, SLOPE_LAG)
}

/// Trend-strength proxy: rolling mean over `period` bars of
/// `|(ma[t] − ma[t−2]) / ma[t−2]| × 100`.
pub fn trend_strength(ma_short: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let step: Vec<Option<f64>> = diff_ratio(ma_short, STRENGTH_LAG)
        .into_iter()
        .map(|v| v.map(|x| (x * 100.0).abs()))
        .collect();
    rolling_mean(&step, period)
}

/// Relative volatility: ATR over close, as a percentage.
pub fn relative_volatility(atr: &[Option<f64>], closes: &[Option<f64>]) -> Vec<Option<f64>> {
    atr.iter()
        .zip(closes.iter())
        .map(|(a, c)| match (a, c) {
            (Some(a), Some(c)) if *c != 0.0 => Some(a / c * 100.0),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, opts, DEFAULT_EPSILON};

    #[test]
    fn ma_slope_known_value() {
        let ma = opts(&[100.0, 101.0, 102.0, 103.0, 110.0]);
        let slope = ma_slope(&ma);
        assert_eq!(slope[3], None);
        assert_approx(slope[4].unwrap(), 0.1, DEFAULT_EPSILON);
    }

    #[test]
    fn ma_slope_flat_series_is_zero() {
        let ma = opts(&[50.0; 10]);
        let slope = ma_slope(&ma);
        assert_approx(slope[9].unwrap(), 0.0, DEFAULT_EPSILON);
    }

    #[test]
    fn trend_strength_known_value() {
        // 2-bar steps on [100, 100, 102, 104, 106]:
        //   t=2: |2/100|*100 = 2.0
        //   t=3: |4/100|*100 = 4.0
        //   t=4: |4/102|*100 ≈ 3.9216
        let ma = opts(&[100.0, 100.0, 102.0, 104.0, 106.0]);
        let strength = trend_strength(&ma, 3);
        assert_eq!(strength[3], None);
        let expected = (2.0 + 4.0 + 400.0 / 102.0) / 3.0;
        assert_approx(strength[4].unwrap(), expected, 1e-9);
    }

    #[test]
    fn trend_strength_is_direction_agnostic() {
        let rising = opts(&[100.0, 100.0, 102.0, 104.0, 106.0, 108.0]);
        let falling = opts(&[100.0, 100.0, 98.0, 96.0, 94.0, 92.0]);
        let up = trend_strength(&rising, 2);
        let down = trend_strength(&falling, 2);
        // Same step sizes, opposite direction → both strictly positive.
        assert!(up[4].unwrap() > 0.0);
        assert!(down[4].unwrap() > 0.0);
    }

    #[test]
    fn relative_volatility_known_value() {
        let atr = vec![Some(2.0), Some(3.0), None];
        let closes = opts(&[100.0, 0.0, 100.0]);
        let rel = relative_volatility(&atr, &closes);
        assert_approx(rel[0].unwrap(), 2.0, DEFAULT_EPSILON);
        // Zero close → undefined, not infinity.
        assert_eq!(rel[1], None);
        assert_eq!(rel[2], None);
    }
}
