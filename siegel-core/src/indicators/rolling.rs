//! Rolling-window primitives over optional series.
//!
//! All windows are inclusive trailing windows of exactly `window` elements.
//! A window that extends before the series start, or that contains any
//! undefined element, yields `None` — undefined never defaults to zero.
//! Mean uses a running sum; min/max use monotonic deques, so every primitive
//! is O(N) over the series.

use std::collections::VecDeque;

/// Rolling arithmetic mean.
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let mut result = vec![None; n];
    if window == 0 {
        return result;
    }

    let mut sum = 0.0;
    let mut missing = 0usize;
    for i in 0..n {
        match values[i] {
            Some(v) => sum += v,
            None => missing += 1,
        }
        if i >= window {
            match values[i - window] {
                Some(v) => sum -= v,
                None => missing -= 1,
            }
        }
        if i + 1 >= window && missing == 0 {
            result[i] = Some(sum / window as f64);
        }
    }
    result
}

/// Rolling minimum.
pub fn rolling_min(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    rolling_extreme(values, window, |candidate, incumbent| candidate <= incumbent)
}

/// Rolling maximum.
pub fn rolling_max(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    rolling_extreme(values, window, |candidate, incumbent| candidate >= incumbent)
}

/// `(v[t] − v[t−lag]) / v[t−lag]`.
///
/// `None` when either operand is undefined or the base is zero.
pub fn diff_ratio(values: &[Option<f64>], lag: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let mut result = vec![None; n];
    for i in lag..n {
        if let (Some(curr), Some(base)) = (values[i], values[i - lag]) {
            if base != 0.0 {
                result[i] = Some((curr - base) / base);
            }
        }
    }
    result
}

/// Shared monotonic-deque walk for rolling min/max.
///
/// `displaces(candidate, incumbent)` returns true when the incoming value
/// makes a deque tail entry irrelevant.
fn rolling_extreme(
    values: &[Option<f64>],
    window: usize,
    displaces: fn(f64, f64) -> bool,
) -> Vec<Option<f64>> {
    let n = values.len();
    let mut result = vec![None; n];
    if window == 0 {
        return result;
    }

    let mut deque: VecDeque<(usize, f64)> = VecDeque::new();
    let mut missing = 0usize;
    for i in 0..n {
        match values[i] {
            Some(v) => {
                while matches!(deque.back(), Some(&(_, tail)) if displaces(v, tail)) {
                    deque.pop_back();
                }
                deque.push_back((i, v));
            }
            None => missing += 1,
        }
        if i >= window && values[i - window].is_none() {
            missing -= 1;
        }
        while matches!(deque.front(), Some(&(idx, _)) if idx + window <= i) {
            deque.pop_front();
        }
        if i + 1 >= window && missing == 0 {
            result[i] = deque.front().map(|&(_, v)| v);
        }
    }
    result
}
