//! Strategy engine — walks a price path, records signal transitions, and
//! realizes PnL when positions are closed by the next transition.
//!
//! 1. Scan: sample the signal at `warmup, warmup + step, ...`
//! 2. Record: append a leg whenever the signal flips to a new non-flat value
//! 3. Realize: pairwise over legs, the earlier leg's side decides the sign

pub mod accumulator;

pub use accumulator::{evaluate, evaluate_with, scan_legs};

use crate::indicators::IndicatorError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("scan step must be >= 1")]
    ZeroStep,

    #[error(transparent)]
    Indicator(#[from] IndicatorError),
}
