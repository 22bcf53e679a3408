//! Average True Range (ATR), simple-mean variant.
//!
//! True range: max(|high − low|, |high − prev_close|, |low − prev_close|).
//! The ATR here is a plain rolling mean of the true range over `period`
//! bars — deliberately not Wilder smoothing; the stop distance is calibrated
//! against this variant.
//! At the first bar (no previous close) the true range degrades to high − low.

use crate::domain::WeeklyBar;
use crate::indicators::rolling::rolling_mean;

/// Compute the true-range series.
///
/// Each element is the maximum over the range candidates that are computable
/// from present fields; a bar where none are computable yields `None`.
pub fn true_range(bars: &[WeeklyBar]) -> Vec<Option<f64>> {
    let n = bars.len();
    let mut tr = vec![None; n];

    for i in 0..n {
        let high = bars[i].high;
        let low = bars[i].low;
        let prev_close = if i > 0 { bars[i - 1].close } else { None };

        let mut best: Option<f64> = None;
        let mut consider = |candidate: Option<f64>| {
            if let Some(c) = candidate {
                best = Some(match best {
                    Some(b) => b.max(c),
                    None => c,
                });
            }
        };

        consider(match (high, low) {
            (Some(h), Some(l)) => Some((h - l).abs()),
            _ => None,
        });
        consider(match (high, prev_close) {
            (Some(h), Some(pc)) => Some((h - pc).abs()),
            _ => None,
        });
        consider(match (low, prev_close) {
            (Some(l), Some(pc)) => Some((l - pc).abs()),
            _ => None,
        });

        tr[i] = best;
    }
    tr
}

/// ATR: rolling mean of the true range over `period` bars.
pub fn atr(bars: &[WeeklyBar], period: usize) -> Vec<Option<f64>> {
    rolling_mean(&true_range(bars), period)
}
