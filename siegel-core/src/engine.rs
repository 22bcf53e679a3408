//! Run orchestration — validate, enrich, size, stop, and score a series.
//!
//! A run is a single synchronous pass: indicators → signal composition →
//! {position sizing, stop prices} → statistics. The input series is
//! borrowed, never mutated; every run produces a fresh enriched sequence of
//! the same length and order. Sizing and stops are independent of each
//! other and only depend on the signal rows.

use crate::config::StrategyConfig;
use crate::domain::{LatestSignal, PositionRow, SignalType, WeeklyBar};
use crate::error::{ConfigError, StrategyError};
use crate::stats::StatsRecord;
use crate::{indicators, signals, sizing, stats, stops};
use serde::{Deserialize, Serialize};

/// The strategy engine: an immutable configuration and nothing else.
#[derive(Debug, Clone)]
pub struct Strategy {
    config: StrategyConfig,
}

/// Output of one full run: the enriched row sequence (for charting) and the
/// aggregate statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRun {
    pub rows: Vec<PositionRow>,
    pub stats: StatsRecord,
}

impl Strategy {
    /// Build a strategy from a configuration, validating it once.
    pub fn new(config: StrategyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// Run the full pipeline over a weekly bar series.
    ///
    /// Fails fast on an empty or malformed series; per-bar undefined values
    /// are not errors and travel through the rows as `None`.
    pub fn run(&self, bars: &[WeeklyBar]) -> Result<StrategyRun, StrategyError> {
        validate_input(bars)?;

        let indicator_rows = indicators::compute(bars, &self.config);
        let signal_rows = signals::compose(indicator_rows, &self.config);
        let stop_column = stops::stop_losses(&signal_rows, &self.config);

        let rows: Vec<PositionRow> = signal_rows
            .into_iter()
            .zip(stop_column)
            .map(|(signal, stop_loss)| {
                let position = sizing::position_size(signal.composite_signal, &self.config);
                PositionRow {
                    signal,
                    position,
                    stop_loss,
                }
            })
            .collect();

        let stats = stats::compute(&rows);
        Ok(StrategyRun { rows, stats })
    }

    /// Run the pipeline and snapshot the final row for reporting.
    pub fn latest_signal(&self, bars: &[WeeklyBar]) -> Result<LatestSignal, StrategyError> {
        let run = self.run(bars)?;
        // A validated series has at least one bar, so a last row exists.
        run.latest_signal().ok_or(StrategyError::EmptyInput)
    }
}

impl StrategyRun {
    /// Snapshot of the last enriched row plus the run statistics.
    ///
    /// `None` only for an empty row sequence.
    pub fn latest_signal(&self) -> Option<LatestSignal> {
        let row = self.rows.last()?;
        Some(LatestSignal {
            date: row.date(),
            close: row.close(),
            composite_signal: row.composite_signal(),
            position: row.position,
            signal_type: row.position.map(SignalType::from_position),
            stop_loss: row.stop_loss,
            ma_long: row.signal.indicator.ma_long,
            ma_short: row.signal.indicator.ma_short,
            rsi: row.signal.indicator.rsi,
            macd: row.signal.indicator.macd,
            trend_strength: row.signal.indicator.trend_strength,
            stats: self.stats.clone(),
        })
    }
}

/// Reject inputs the pipeline must not touch: empty series, non-finite
/// values, and dates that fail to strictly increase. Reported before any
/// computation begins.
fn validate_input(bars: &[WeeklyBar]) -> Result<(), StrategyError> {
    if bars.is_empty() {
        return Err(StrategyError::EmptyInput);
    }
    for (index, bar) in bars.iter().enumerate() {
        if let Some(field) = bar.non_finite_field() {
            return Err(StrategyError::MalformedInput {
                index,
                reason: format!("{field} is not finite"),
            });
        }
        if index > 0 {
            let prev = bars[index - 1].date;
            if bar.date <= prev {
                return Err(StrategyError::MalformedInput {
                    index,
                    reason: format!("date {} does not increase past {}", bar.date, prev),
                });
            }
        }
    }
    Ok(())
}
