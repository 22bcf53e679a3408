//! Position-history analysis for the reporting collaborator.
//!
//! Pure comparisons over the enriched rows: what the latest position change
//! means as an action, and a short summary of where the position has been
//! heading. All dates are measured against the last bar of the series, so
//! repeated runs over the same data give identical output.

use crate::domain::PositionRow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What a position transition asks the holder to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionAction {
    /// From flat to exposed.
    Open,
    /// Exposure increased.
    Add,
    /// Exposure decreased but not to zero.
    Reduce,
    /// From exposed to flat.
    Close,
    /// No change.
    Hold,
}

/// A position transition and its size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalChange {
    pub action: PositionAction,
    pub delta: f64,
}

/// Classify the transition between two position tiers.
pub fn analyze_change(current: f64, previous: f64) -> SignalChange {
    let action = if current > previous {
        if previous == 0.0 {
            PositionAction::Open
        } else {
            PositionAction::Add
        }
    } else if current < previous {
        if current == 0.0 {
            PositionAction::Close
        } else {
            PositionAction::Reduce
        }
    } else {
        PositionAction::Hold
    };
    SignalChange {
        action,
        delta: current - previous,
    }
}

/// Direction of the recent position changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionTrend {
    Rising,
    Falling,
    Choppy,
    Unchanged,
    Insufficient,
}

/// Summary of the position history: where exposure stands and how it got
/// there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSummary {
    pub current_position: Option<f64>,
    pub last_change_date: Option<NaiveDate>,
    /// Calendar days from the last change to the final bar.
    pub days_since_change: Option<i64>,
    pub trend: PositionTrend,
}

/// Summarize the position column of an enriched row sequence.
///
/// The trend looks at the last three position changes: more increases than
/// decreases reads as rising, the reverse as falling, a tie as choppy. A
/// history with no change at all is `Unchanged` (dated from the first
/// retained row); fewer than two recent changes is `Insufficient`.
pub fn summarize_positions(rows: &[PositionRow]) -> PositionSummary {
    let retained: Vec<(NaiveDate, f64)> = rows
        .iter()
        .filter_map(|row| row.position.map(|p| (row.date(), p)))
        .collect();

    let Some(&(_, current_position)) = retained.last() else {
        return PositionSummary {
            current_position: None,
            last_change_date: None,
            days_since_change: None,
            trend: PositionTrend::Insufficient,
        };
    };
    let last_date = rows[rows.len() - 1].date();

    let deltas: Vec<(NaiveDate, f64)> = retained
        .windows(2)
        .filter(|w| w[1].1 != w[0].1)
        .map(|w| (w[1].0, w[1].1 - w[0].1))
        .collect();

    let (last_change_date, trend) = match deltas.last() {
        None => (retained[0].0, PositionTrend::Unchanged),
        Some(&(date, _)) => {
            let recent = &deltas[deltas.len().saturating_sub(3)..];
            let trend = if recent.len() < 2 {
                PositionTrend::Insufficient
            } else {
                let increases = recent.iter().filter(|(_, d)| *d > 0.0).count();
                let decreases = recent.iter().filter(|(_, d)| *d < 0.0).count();
                if increases > decreases {
                    PositionTrend::Rising
                } else if decreases > increases {
                    PositionTrend::Falling
                } else {
                    PositionTrend::Choppy
                }
            };
            (date, trend)
        }
    };

    PositionSummary {
        current_position: Some(current_position),
        last_change_date: Some(last_change_date),
        days_since_change: Some(last_date.signed_duration_since(last_change_date).num_days()),
        trend,
    }
}
