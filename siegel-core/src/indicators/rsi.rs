//! Relative Strength Index (RSI), rolling-mean variant.
//!
//! Gains and losses are plain rolling means over `period` bars (not Wilder
//! smoothing): RS = avg_gain / avg_loss, RSI = 100 − 100 / (1 + RS).
//! A zero average loss leaves RS — and the RSI — undefined for that bar;
//! no clamp to 100 is fabricated.

use crate::indicators::rolling::rolling_mean;

/// Compute the RSI of a close series.
pub fn rsi(closes: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut gains = vec![None; n];
    let mut losses = vec![None; n];

    for i in 1..n {
        if let (Some(curr), Some(prev)) = (closes[i], closes[i - 1]) {
            let delta = curr - prev;
            gains[i] = Some(if delta > 0.0 { delta } else { 0.0 });
            losses[i] = Some(if delta < 0.0 { -delta } else { 0.0 });
        }
    }

    let avg_gain = rolling_mean(&gains, period);
    let avg_loss = rolling_mean(&losses, period);

    avg_gain
        .iter()
        .zip(avg_loss.iter())
        .map(|(gain, loss)| match (gain, loss) {
            (Some(g), Some(l)) if *l != 0.0 => Some(100.0 - 100.0 / (1.0 + g / l)),
            _ => None,
        })
        .collect()
}
