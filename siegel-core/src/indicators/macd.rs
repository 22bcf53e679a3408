//! Moving Average Convergence Divergence (MACD).
//!
//! Line: EMA(close, fast) − EMA(close, slow).
//! Signal: EMA(line, signal_span). Histogram: line − signal.
//! With the first-value-seeded EMA, all three series exist from the first
//! defined close.

use crate::indicators::ema::ema;

/// The three MACD output series, all input-length.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub line: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// Compute MACD line, signal line, and histogram for a close series.
pub fn macd(closes: &[Option<f64>], fast: usize, slow: usize, signal_span: usize) -> MacdSeries {
    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);

    let line: Vec<Option<f64>> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => Some(f - s),
            _ => None,
        })
        .collect();

    let signal = ema(&line, signal_span);

    let histogram: Vec<Option<f64>> = line
        .iter()
        .zip(signal.iter())
        .map(|(l, s)| match (l, s) {
            (Some(l), Some(s)) => Some(l - s),
            _ => None,
        })
        .collect();

    MacdSeries {
        line,
        signal,
        histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, opts, DEFAULT_EPSILON};

    #[test]
    fn macd_first_bar_is_zero() {
        // Both EMAs seed with close[0], so the line starts at 0 and the
        // histogram follows.
        let values = opts(&[100.0, 102.0, 101.0, 105.0]);
        let m = macd(&values, 2, 4, 3);
        assert_approx(m.line[0].unwrap(), 0.0, DEFAULT_EPSILON);
        assert_approx(m.signal[0].unwrap(), 0.0, DEFAULT_EPSILON);
        assert_approx(m.histogram[0].unwrap(), 0.0, DEFAULT_EPSILON);
    }

    #[test]
    fn macd_known_values() {
        // fast span 2 → alpha 2/3; slow span 4 → alpha 2/5.
        // closes: 10, 13
        // fast: [10, 12], slow: [10, 11.2] → line: [0, 0.8]
        let values = opts(&[10.0, 13.0]);
        let m = macd(&values, 2, 4, 3);
        assert_approx(m.line[1].unwrap(), 0.8, DEFAULT_EPSILON);
        // signal span 3 → alpha 0.5: [0, 0.4]; histogram: [0, 0.4]
        assert_approx(m.signal[1].unwrap(), 0.4, DEFAULT_EPSILON);
        assert_approx(m.histogram[1].unwrap(), 0.4, DEFAULT_EPSILON);
    }

    #[test]
    fn macd_rising_trend_has_positive_line() {
        let values = opts(&[
            100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 106.0, 107.0, 108.0, 109.0,
        ]);
        let m = macd(&values, 3, 6, 4);
        // Fast EMA tracks a rising series more closely than the slow EMA.
        assert!(m.line[9].unwrap() > 0.0);
    }

    #[test]
    fn macd_constant_series_is_zero_everywhere() {
        let values = opts(&[42.0; 30]);
        let m = macd(&values, 12, 26, 9);
        for i in 0..30 {
            assert_approx(m.line[i].unwrap(), 0.0, DEFAULT_EPSILON);
            assert_approx(m.histogram[i].unwrap(), 0.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn macd_mid_series_hole_is_local() {
        let mut values = opts(&[100.0, 101.0, 102.0, 103.0, 104.0]);
        values[2] = None;
        let m = macd(&values, 2, 3, 2);
        assert!(m.line[1].is_some());
        // The hole stays at its bar; the EMAs resume from their kept state.
        assert_eq!(m.line[2], None);
        assert_eq!(m.histogram[2], None);
        assert!(m.line[3].is_some());
        assert!(m.histogram[4].is_some());
    }
}
