//! Signal generation — maps a price path position to a directional signal.
//!
//! Signals are stateless: they see only the price history up to and
//! including the evaluated index. Position state lives in the engine's
//! trade ledger, never in the generator.

pub mod ma_crossover;

pub use ma_crossover::{crossover_signal, MaCrossover};

use crate::domain::Signal;
use crate::indicators::IndicatorError;

/// Trait for signal generators consumed by the PnL engine.
pub trait SignalGenerator: Send + Sync {
    /// Human-readable name (e.g., "ma_crossover").
    fn name(&self) -> &str;

    /// First index at which the engine starts sampling this signal.
    fn warmup_bars(&self) -> usize;

    /// Signal at `index`. Flat when there is not enough history yet.
    fn evaluate(&self, path: &[f64], index: usize) -> Result<Signal, IndicatorError>;
}
