//! PricePath — an immutable sequence of simulated prices.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Ordered sequence of prices, index `0..len`.
///
/// Built once by the simulator (or from a fixture) and only ever read
/// afterwards: the inner vector is private and the path derefs to `&[f64]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PricePath(Vec<f64>);

impl PricePath {
    pub fn new(prices: Vec<f64>) -> Self {
        Self(prices)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn first(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.0.last().copied()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for PricePath {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for PricePath {
    fn from(prices: Vec<f64>) -> Self {
        Self(prices)
    }
}

impl FromIterator<f64> for PricePath {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
