//! Moving average crossover signal.
//!
//! Long while the short MA is above the long MA, Short while it is below,
//! Flat on exact equality or before the long window has enough history.

use crate::domain::{Signal, WindowSpec};
use crate::indicators::{moving_average, IndicatorError};

use super::SignalGenerator;

/// Crossover signal at `index` for an arbitrary window pair.
///
/// Returns Flat without touching the moving averages while
/// `index < warmup - 1`, where `warmup` is the larger of the two windows
/// (the long window for a well-formed pair). Past warmup, an `index` outside
/// the path is an `OutOfRange` error.
pub fn crossover_signal(
    path: &[f64],
    short_window: usize,
    long_window: usize,
    index: usize,
) -> Result<Signal, IndicatorError> {
    let warmup = short_window.max(long_window);
    if index < warmup.saturating_sub(1) {
        return Ok(Signal::Flat);
    }

    let short_ma = moving_average(path, index, short_window)?;
    let long_ma = moving_average(path, index, long_window)?;

    Ok(if short_ma > long_ma {
        Signal::Long
    } else if short_ma < long_ma {
        Signal::Short
    } else {
        Signal::Flat
    })
}

/// Moving average crossover signal generator over a validated window pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaCrossover {
    windows: WindowSpec,
}

impl MaCrossover {
    pub fn new(windows: WindowSpec) -> Self {
        Self { windows }
    }

    pub fn windows(&self) -> WindowSpec {
        self.windows
    }
}

impl SignalGenerator for MaCrossover {
    fn name(&self) -> &str {
        "ma_crossover"
    }

    /// The engine starts sampling at the long window.
    fn warmup_bars(&self) -> usize {
        self.windows.long()
    }

    fn evaluate(&self, path: &[f64], index: usize) -> Result<Signal, IndicatorError> {
        crossover_signal(path, self.windows.short(), self.windows.long(), index)
    }
}
