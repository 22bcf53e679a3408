//! Domain types — bars, enriched rows, and the latest-signal snapshot.

pub mod bar;
pub mod latest;
pub mod rows;

pub use bar::WeeklyBar;
pub use latest::{LatestSignal, SignalType};
pub use rows::{IndicatorRow, PositionRow, SignalRow};
