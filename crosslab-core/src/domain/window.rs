//! WindowSpec — the (short, long) moving-average window pair.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("{which} window must be >= 1")]
    Zero { which: &'static str },

    #[error("short window ({short}) must be strictly less than long window ({long})")]
    NotIncreasing { short: usize, long: usize },
}

/// Validated window pair: `1 <= short < long`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WindowSpec {
    short: usize,
    long: usize,
}

impl WindowSpec {
    pub fn new(short: usize, long: usize) -> Result<Self, WindowError> {
        if short == 0 {
            return Err(WindowError::Zero { which: "short" });
        }
        if long == 0 {
            return Err(WindowError::Zero { which: "long" });
        }
        if short >= long {
            return Err(WindowError::NotIncreasing { short, long });
        }
        Ok(Self { short, long })
    }

    pub fn short(&self) -> usize {
        self.short
    }

    pub fn long(&self) -> usize {
        self.long
    }
}
