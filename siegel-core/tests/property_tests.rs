//! Property tests for pipeline invariants.
//!
//! Uses proptest to verify:
//! 1. Length preservation — the run yields exactly one row per input bar
//! 2. Signal bounds — every defined sub-signal and composite sits in [0, 1]
//! 3. Tier set closure — defined positions only take the five tier literals
//! 4. Sizing monotonicity — a higher score never yields a smaller tier
//! 5. Drawdown sign — max drawdown is never positive

use proptest::prelude::*;
use proptest::strategy::Strategy as _;
use siegel_core::sizing;
use siegel_core::{Strategy, StrategyConfig, WeeklyBar};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_close() -> impl proptest::strategy::Strategy<Value = f64> {
    (10.0..500.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_closes(max_len: usize) -> impl proptest::strategy::Strategy<Value = Vec<f64>> {
    prop::collection::vec(arb_close(), 1..max_len)
}

fn bars_from_closes(closes: &[f64]) -> Vec<WeeklyBar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 3).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            WeeklyBar {
                date: base_date + chrono::Duration::weeks(i as i64),
                open: Some(open),
                high: Some(open.max(close) + 1.0),
                low: Some(open.min(close) - 1.0),
                close: Some(close),
                volume: Some(1_000_000.0),
            }
        })
        .collect()
}

fn small_config() -> StrategyConfig {
    StrategyConfig {
        ma_long: 6,
        ma_short: 4,
        rsi_period: 3,
        macd_fast: 3,
        macd_slow: 5,
        macd_signal: 2,
        adx_period: 3,
        atr_period: 3,
        ..StrategyConfig::default()
    }
}

// ── 1. Length Preservation ───────────────────────────────────────────

proptest! {
    /// Every input bar produces exactly one output row, in order.
    #[test]
    fn run_preserves_length_and_order(closes in arb_closes(120)) {
        let bars = bars_from_closes(&closes);
        let strategy = Strategy::new(small_config()).unwrap();
        let run = strategy.run(&bars).unwrap();

        prop_assert_eq!(run.rows.len(), bars.len());
        for (row, bar) in run.rows.iter().zip(bars.iter()) {
            prop_assert_eq!(row.date(), bar.date);
        }
    }
}

// ── 2. Signal Bounds ─────────────────────────────────────────────────

proptest! {
    /// Defined sub-signals and composites never leave [0, 1], and the trend
    /// sub-signal is strictly binary.
    #[test]
    fn defined_signals_stay_bounded(closes in arb_closes(120)) {
        let bars = bars_from_closes(&closes);
        let strategy = Strategy::new(small_config()).unwrap();
        let run = strategy.run(&bars).unwrap();

        for row in &run.rows {
            let signal = &row.signal;
            if let Some(t) = signal.trend_signal {
                prop_assert!(t == 0.0 || t == 1.0, "non-binary trend signal {t}");
            }
            for value in [
                signal.slope_signal,
                signal.momentum_signal,
                signal.environment_signal,
                signal.composite_signal,
            ]
            .into_iter()
            .flatten()
            {
                prop_assert!(
                    (0.0..=1.0).contains(&value),
                    "signal out of bounds: {value}"
                );
            }
        }
    }
}

// ── 3. Tier Set Closure ──────────────────────────────────────────────

proptest! {
    /// A defined position is always one of the five tier literals, and an
    /// undefined composite never produces a position.
    #[test]
    fn positions_take_only_tier_literals(closes in arb_closes(120)) {
        let bars = bars_from_closes(&closes);
        let strategy = Strategy::new(small_config()).unwrap();
        let run = strategy.run(&bars).unwrap();

        for row in &run.rows {
            match row.position {
                Some(p) => {
                    prop_assert!(
                        [0.0, 0.8, 1.0, 1.2, 1.4].contains(&p),
                        "unexpected tier {p}"
                    );
                    prop_assert!(row.composite_signal().is_some());
                }
                None => prop_assert!(row.composite_signal().is_none()),
            }
        }
    }
}

// ── 4. Sizing Monotonicity ───────────────────────────────────────────

proptest! {
    /// A higher composite score never maps to a smaller position tier.
    #[test]
    fn sizing_is_monotonic(a in 0.0..=1.0_f64, b in 0.0..=1.0_f64) {
        let cfg = StrategyConfig::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            sizing::position_tier(lo, &cfg) <= sizing::position_tier(hi, &cfg),
            "tier decreased from score {lo} to {hi}"
        );
    }
}

// ── 5. Drawdown Sign ─────────────────────────────────────────────────

proptest! {
    /// Max drawdown is measured from a running peak, so it can never be
    /// positive, and the stop column is empty before the warm-up index.
    #[test]
    fn drawdown_and_warmup_invariants(closes in arb_closes(120)) {
        let bars = bars_from_closes(&closes);
        let cfg = small_config();
        let warmup = cfg.ma_long.max(cfg.adx_period);
        let strategy = Strategy::new(cfg).unwrap();
        let run = strategy.run(&bars).unwrap();

        if let Some(dd) = run.stats.max_drawdown {
            prop_assert!(dd <= 0.0, "positive max drawdown {dd}");
        }
        for row in run.rows.iter().take(warmup) {
            prop_assert_eq!(row.stop_loss, None);
        }
    }
}
