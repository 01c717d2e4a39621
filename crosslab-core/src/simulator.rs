//! Geometric Brownian Motion price simulator.
//!
//! Each step draws a return `r ~ N(drift, volatility)` and scales the running
//! price by `1 + r`. The noise is multiplicative: the distribution is over
//! the return, not the price level. There is no clamping, so extreme draws
//! with a large volatility can push the price to zero or below.

use crate::domain::PricePath;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimulationError {
    #[error("volatility must be finite and >= 0 (got {0})")]
    InvalidVolatility(f64),
}

/// Parameters of the per-step return distribution and the starting price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GbmParams {
    pub drift: f64,
    pub volatility: f64,
    pub initial_price: f64,
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            drift: 0.0,
            volatility: 0.01,
            initial_price: 100.0,
        }
    }
}

/// Generate a path of exactly `steps` prices.
///
/// The initial price itself is not part of the path: element 0 is the price
/// after the first step.
pub fn generate<R: Rng + ?Sized>(
    params: &GbmParams,
    steps: usize,
    rng: &mut R,
) -> Result<PricePath, SimulationError> {
    if !params.volatility.is_finite() || params.volatility < 0.0 {
        return Err(SimulationError::InvalidVolatility(params.volatility));
    }
    let returns = Normal::new(params.drift, params.volatility)
        .map_err(|_| SimulationError::InvalidVolatility(params.volatility))?;

    let mut price = params.initial_price;
    let mut prices = Vec::with_capacity(steps);
    for _ in 0..steps {
        price *= 1.0 + returns.sample(rng);
        prices.push(price);
    }
    Ok(PricePath::new(prices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn path_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let path = generate(&GbmParams::default(), 250, &mut rng).unwrap();
        assert_eq!(path.len(), 250);
    }

    #[test]
    fn zero_steps_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(generate(&GbmParams::default(), 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn zero_volatility_compounds_drift_exactly() {
        let params = GbmParams {
            drift: 0.01,
            volatility: 0.0,
            initial_price: 100.0,
        };
        let mut rng = StdRng::seed_from_u64(1);
        let path = generate(&params, 3, &mut rng).unwrap();
        let expected = [101.0, 102.01, 103.0301];
        for (got, want) in path.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
        }
    }

    #[test]
    fn step_is_multiplicative() {
        // Each price divided by the previous one is 1 + r, so with zero drift
        // and small volatility every ratio stays close to 1.
        let mut rng = StdRng::seed_from_u64(99);
        let path = generate(&GbmParams::default(), 1000, &mut rng).unwrap();
        for w in path.windows(2) {
            let r = w[1] / w[0] - 1.0;
            assert!(r.abs() < 0.1, "implausible 10-sigma return {r}");
        }
    }

    #[test]
    fn same_seed_same_path() {
        let params = GbmParams::default();
        let a = generate(&params, 500, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate(&params, 500, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_different_paths() {
        let params = GbmParams::default();
        let a = generate(&params, 500, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate(&params, 500, &mut StdRng::seed_from_u64(43)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn negative_volatility_rejected() {
        let params = GbmParams {
            volatility: -0.5,
            ..GbmParams::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate(&params, 10, &mut rng),
            Err(SimulationError::InvalidVolatility(-0.5))
        );
    }
}
