//! Position sizing — composite score to discrete exposure tier.
//!
//! Thresholds are evaluated top-down, and the weak-signal band is nested
//! inside the base-threshold band rather than being a top-level tier of its
//! own. The ordering matters at the boundaries and must stay exactly as
//! written.

use crate::config::StrategyConfig;

/// Map a composite score to a position tier in {0.0, 0.8, 1.0, 1.2, 1.4}.
pub fn position_tier(score: f64, config: &StrategyConfig) -> f64 {
    if score >= config.very_strong_signal {
        1.4
    } else if score >= config.strong_signal {
        1.2
    } else if score >= config.signal_threshold {
        if score < config.weak_signal {
            0.8
        } else {
            1.0
        }
    } else {
        0.0
    }
}

/// Tier for an optional score; an undefined score yields an undefined
/// position, never a default flat one.
pub fn position_size(score: Option<f64>, config: &StrategyConfig) -> Option<f64> {
    score.map(|s| position_tier(s, config))
}
