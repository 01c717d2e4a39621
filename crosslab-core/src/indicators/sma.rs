//! Simple Moving Average (SMA).
//!
//! Mean of the `window` most recent prices ending at and including
//! `end_index`, i.e. `path[end_index + 1 - window ..= end_index]`.
//! First valid index is `window - 1`.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndicatorError {
    #[error("moving average window must be >= 1")]
    ZeroWindow,

    #[error(
        "moving average out of range: window {window} ending at index {end_index} \
         over a path of length {len}"
    )]
    OutOfRange {
        end_index: usize,
        window: usize,
        len: usize,
    },
}

/// Average of the `window` values ending at `end_index`.
///
/// Fails when the window does not fit inside the path: `window == 0`,
/// `end_index + 1 < window`, or `end_index >= path.len()`.
pub fn moving_average(path: &[f64], end_index: usize, window: usize) -> Result<f64, IndicatorError> {
    if window == 0 {
        return Err(IndicatorError::ZeroWindow);
    }
    if end_index >= path.len() || end_index + 1 < window {
        return Err(IndicatorError::OutOfRange {
            end_index,
            window,
            len: path.len(),
        });
    }
    Ok(window_mean(&path[end_index + 1 - window..=end_index]))
}

fn window_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
