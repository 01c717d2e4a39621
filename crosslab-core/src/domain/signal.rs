//! Directional signal emitted by the crossover engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tri-state crossover signal.
///
/// Numerically `Long = +1`, `Short = -1`, `Flat = 0` at the boundary
/// (CSV, JSON, logs). Inside the engine it is always the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Long,
    Short,
    #[default]
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("signal value must be -1, 0 or 1 (got {0})")]
pub struct SignalValueError(pub i8);

impl Signal {
    pub fn as_i8(self) -> i8 {
        match self {
            Signal::Long => 1,
            Signal::Short => -1,
            Signal::Flat => 0,
        }
    }

    pub fn is_flat(self) -> bool {
        self == Signal::Flat
    }

    /// Sign applied to a price difference when this position is closed.
    pub fn pnl_sign(self) -> f64 {
        f64::from(self.as_i8())
    }
}

impl TryFrom<i8> for Signal {
    type Error = SignalValueError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Signal::Long),
            -1 => Ok(Signal::Short),
            0 => Ok(Signal::Flat),
            other => Err(SignalValueError(other)),
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Long => write!(f, "long"),
            Signal::Short => write!(f, "short"),
            Signal::Flat => write!(f, "flat"),
        }
    }
}
