//! Indicators over price paths.
//!
//! Only the simple moving average is needed by the crossover engine. It is
//! evaluated on demand at a single index rather than precomputed for the
//! whole path, so a decimated scan (`step > 1`) only pays for the bars it
//! actually samples.

pub mod sma;

pub use sma::{moving_average, IndicatorError};

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
