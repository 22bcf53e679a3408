//! Backtest statistics — equity curve, drawdown, and aggregate metrics.
//!
//! The replay drops rows with an undefined position, then compounds the
//! close-to-close return of each retained row against the PREVIOUS retained
//! row's position (signals act one bar late). Metrics that cannot be
//! computed — zero calendar span, zero return variance, fewer than two
//! position changes — are `None`, never a fabricated zero.

use crate::domain::PositionRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Aggregate performance metrics for one full run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub total_return: Option<f64>,
    pub annual_return: Option<f64>,
    pub max_drawdown: Option<f64>,
    pub sharpe_ratio: Option<f64>,
    pub win_rate: Option<f64>,
    /// Number of rows whose position differs from the preceding row's.
    pub trade_count: usize,
    pub volatility: Option<f64>,
}

/// One retained row of the replay: defined position plus its bar context.
#[derive(Debug, Clone, Copy)]
struct Retained {
    date: NaiveDate,
    close: Option<f64>,
    position: f64,
}

/// Compute all metrics for an enriched row sequence.
pub fn compute(rows: &[PositionRow]) -> StatsRecord {
    let retained = retained_rows(rows);
    let equity = equity_of(&retained);

    let total_return = equity.last().map(|e| e - 1.0);

    let max_drawdown = if equity.len() < 2 {
        None
    } else {
        drawdown(&equity)
            .into_iter()
            .fold(None, |acc: Option<f64>, dd| {
                Some(acc.map_or(dd, |a| a.min(dd)))
            })
    };

    let annual_return = match (total_return, retained.first(), retained.last()) {
        (Some(total), Some(first), Some(last)) => {
            let total_days = last.date.signed_duration_since(first.date).num_days();
            if total_days > 0 && 1.0 + total > 0.0 {
                Some((1.0 + total).powf(365.0 / total_days as f64) - 1.0)
            } else {
                None
            }
        }
        _ => None,
    };

    let returns = equity_returns(&equity);
    let (sharpe_ratio, volatility) = if returns.len() < 2 {
        (None, None)
    } else {
        let std = std_dev(&returns);
        let annualizer = TRADING_DAYS_PER_YEAR.sqrt();
        let sharpe = if std > 0.0 {
            Some(annualizer * mean(&returns) / std)
        } else {
            None
        };
        (sharpe, Some(std * annualizer))
    };

    let changes = change_indices(&retained);
    let trade_count = changes.len();
    let win_rate = win_rate_of(&retained, &changes);

    StatsRecord {
        total_return,
        annual_return,
        max_drawdown,
        sharpe_ratio,
        win_rate,
        trade_count,
        volatility,
    }
}

/// Equity curve over the retained rows, starting at 1.0.
///
/// Empty when no row carries a defined position.
pub fn equity_curve(rows: &[PositionRow]) -> Vec<f64> {
    equity_of(&retained_rows(rows))
}

/// Drawdown series: `equity[t] / running_max(equity)[t] − 1`.
pub fn drawdown(equity: &[f64]) -> Vec<f64> {
    let mut peak = f64::NEG_INFINITY;
    equity
        .iter()
        .map(|&e| {
            if e > peak {
                peak = e;
            }
            e / peak - 1.0
        })
        .collect()
}

// ─── Internals ──────────────────────────────────────────────────────

fn retained_rows(rows: &[PositionRow]) -> Vec<Retained> {
    rows.iter()
        .filter_map(|row| {
            row.position.map(|position| Retained {
                date: row.date(),
                close: row.close(),
                position,
            })
        })
        .collect()
}

fn equity_of(retained: &[Retained]) -> Vec<f64> {
    let mut equity = Vec::with_capacity(retained.len());
    if retained.is_empty() {
        return equity;
    }
    equity.push(1.0);
    for t in 1..retained.len() {
        // An uncomputable close return contributes nothing to the curve.
        let ret = match (retained[t].close, retained[t - 1].close) {
            (Some(curr), Some(prev)) if prev != 0.0 => curr / prev - 1.0,
            _ => 0.0,
        };
        let next = equity[t - 1] * (1.0 + ret * retained[t - 1].position);
        equity.push(next);
    }
    equity
}

fn equity_returns(equity: &[f64]) -> Vec<f64> {
    if equity.len() < 2 {
        return Vec::new();
    }
    equity
        .windows(2)
        .map(|w| if w[0] != 0.0 { w[1] / w[0] - 1.0 } else { 0.0 })
        .collect()
}

/// Indices (into the retained sequence) where the position changed.
///
/// The first retained row is never a change: there is nothing to change
/// from.
fn change_indices(retained: &[Retained]) -> Vec<usize> {
    (1..retained.len())
        .filter(|&t| retained[t].position != retained[t - 1].position)
        .collect()
}

/// Win rate over the change rows.
///
/// The "next close return" of a change row is measured to the next change
/// row's close; the final change row has no next close and counts against
/// the rate. Undefined when fewer than two changes exist.
fn win_rate_of(retained: &[Retained], changes: &[usize]) -> Option<f64> {
    if changes.len() < 2 {
        return None;
    }
    let mut wins = 0usize;
    for (j, &idx) in changes.iter().enumerate() {
        let next_return = changes.get(j + 1).and_then(|&next_idx| {
            match (retained[next_idx].close, retained[idx].close) {
                (Some(next), Some(curr)) if curr != 0.0 => Some(next / curr - 1.0),
                _ => None,
            }
        });
        let won = match next_return {
            Some(r) => {
                (retained[idx].position > 0.0 && r > 0.0)
                    || (retained[idx].position == 0.0 && r < 0.0)
            }
            None => false,
        };
        if won {
            wins += 1;
        }
    }
    Some(wins as f64 / changes.len() as f64)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (ddof = 1).
fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}
