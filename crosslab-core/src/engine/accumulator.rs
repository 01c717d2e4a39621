//! PnL accumulator — trade-triggered position accounting over one path.

use crate::domain::{Signal, TradeLedger};
use crate::indicators::IndicatorError;
use crate::signal::{crossover_signal, SignalGenerator};

use super::EngineError;

/// Scan `path` with `generator`, sampling every `step`-th bar from the
/// generator's warmup onward, and record every non-flat signal change.
///
/// A path shorter than the warmup yields an empty ledger. Flat signals never
/// replace the held position.
pub fn scan_legs<S: SignalGenerator + ?Sized>(
    path: &[f64],
    generator: &S,
    step: usize,
) -> Result<TradeLedger, EngineError> {
    if step == 0 {
        return Err(EngineError::ZeroStep);
    }

    let mut ledger = TradeLedger::new();
    let start = generator.warmup_bars();
    if path.len() < start {
        return Ok(ledger);
    }

    for index in (start..path.len()).step_by(step) {
        let signal = generator.evaluate(path, index)?;
        ledger.record(index, path[index], signal);
    }
    Ok(ledger)
}

/// Realized PnL of a generator over one path.
pub fn evaluate_with<S: SignalGenerator + ?Sized>(
    path: &[f64],
    generator: &S,
    step: usize,
) -> Result<f64, EngineError> {
    Ok(scan_legs(path, generator, step)?.realized_pnl())
}

/// Realized PnL of the (short, long) crossover over one path.
///
/// Unlike [`crate::signal::MaCrossover`], the window pair is not validated:
/// the scan starts at `long_window` and the signal itself falls back to the
/// larger window's warmup. A path shorter than `long_window` returns 0.
pub fn evaluate(
    path: &[f64],
    short_window: usize,
    long_window: usize,
    step: usize,
) -> Result<f64, EngineError> {
    let generator = RawCrossover {
        short_window,
        long_window,
    };
    evaluate_with(path, &generator, step)
}

/// Unvalidated window pair adapter used by [`evaluate`].
struct RawCrossover {
    short_window: usize,
    long_window: usize,
}

impl SignalGenerator for RawCrossover {
    fn name(&self) -> &str {
        "ma_crossover"
    }

    fn warmup_bars(&self) -> usize {
        self.long_window
    }

    fn evaluate(&self, path: &[f64], index: usize) -> Result<Signal, IndicatorError> {
        crossover_signal(path, self.short_window, self.long_window, index)
    }
}
