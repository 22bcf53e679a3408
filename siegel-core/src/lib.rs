//! Siegel Core — deterministic signal generation and backtesting for the
//! composite weekly trend strategy.
//!
//! The pipeline converts a time-ordered series of weekly OHLCV bars into:
//! - a bounded composite trading-strength score per bar (four weighted
//!   sub-signals: trend, slope, momentum, market environment)
//! - a discrete position-size tier per bar
//! - a protective stop price per bar
//! - aggregate performance statistics over the whole series
//!
//! Everything is a pure function of the input series and an immutable
//! [`StrategyConfig`]: no I/O, no logging, no state between runs. Missing or
//! not-yet-computable values are `Option<f64>` (`None`), never a NaN
//! sentinel, and propagate column-locally. Only an empty or malformed input
//! series aborts a run.
//!
//! Data acquisition, weekly resampling, charting, and report delivery are
//! owned by the calling application.

pub mod analysis;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod signals;
pub mod sizing;
pub mod stats;
pub mod stops;

pub use config::StrategyConfig;
pub use domain::{IndicatorRow, LatestSignal, PositionRow, SignalRow, SignalType, WeeklyBar};
pub use engine::{Strategy, StrategyRun};
pub use error::{ConfigError, StrategyError};
pub use stats::StatsRecord;
