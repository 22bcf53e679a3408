//! Exponential Moving Average (EMA).
//!
//! Recursive form: `EMA[t] = alpha * x[t] + (1 - alpha) * EMA[t-1]` with
//! `alpha = 2 / (span + 1)`, seeded with the first defined value — so on a
//! fully defined series the EMA exists from the first bar. This matches the
//! span-based recursive smoothing the strategy has always used, not an
//! SMA-seeded variant.
//!
//! Leading undefined values are skipped; an undefined value after the seed
//! leaves a hole at that bar but keeps the smoothing state, so the series
//! resumes on the next defined value.

/// Compute the EMA of an optional series.
pub fn ema(values: &[Option<f64>], span: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let mut result = vec![None; n];
    if span == 0 {
        return result;
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut state: Option<f64> = None;

    for i in 0..n {
        match (state, values[i]) {
            (None, Some(v)) => {
                state = Some(v);
                result[i] = Some(v);
            }
            (Some(prev), Some(v)) => {
                let smoothed = alpha * v + (1.0 - alpha) * prev;
                state = Some(smoothed);
                result[i] = Some(smoothed);
            }
            // Undefined after the seed: hole in the output, state kept.
            (Some(_), None) | (None, None) => {}
        }
    }
    result
}
