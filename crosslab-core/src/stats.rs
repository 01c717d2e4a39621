//! Summary statistics over trial PnL.
//!
//! Pure functions over a finite slice of reals. `mean` and `win_rate` define
//! an empty input as 0; `min`, `max` and `percentile` have no meaningful
//! value on an empty input and return `StatsError::EmptyInput` instead.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("statistic is undefined on an empty input")]
    EmptyInput,
}

/// Arithmetic mean. 0.0 on empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn min(values: &[f64]) -> Result<f64, StatsError> {
    values
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(StatsError::EmptyInput)
}

pub fn max(values: &[f64]) -> Result<f64, StatsError> {
    values
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(StatsError::EmptyInput)
}

/// Number of values satisfying `predicate`.
pub fn count_if<F>(values: &[f64], predicate: F) -> usize
where
    F: Fn(f64) -> bool,
{
    values.iter().filter(|&&v| predicate(v)).count()
}

/// Fraction of values strictly greater than zero. 0.0 on empty input.
pub fn win_rate(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    count_if(values, |v| v > 0.0) as f64 / values.len() as f64
}

/// Sample standard deviation (n - 1). 0.0 for fewer than two values.
pub fn std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (n - 1) as f64;
    var.sqrt()
}

/// Percentile `p` in [0, 100] using linear interpolation between ranks.
pub fn percentile(values: &[f64], p: f64) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(percentile_sorted(&sorted, p))
}

/// Percentile of an already sorted, non-empty slice.
fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = (p.clamp(0.0, 100.0) / 100.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = rank - lo as f64;
    sorted[lo] * (1.0 - frac) + sorted[hi] * frac
}
