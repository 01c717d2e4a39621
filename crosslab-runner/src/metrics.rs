//! Aggregate statistics over a Monte Carlo run.
//!
//! Built entirely from the pure helpers in `crosslab_core::stats`, so the
//! runner's aggregate and a standalone recomputation always agree.

use std::fmt;

use crosslab_core::stats::{self, StatsError};
use serde::{Deserialize, Serialize};

/// Distribution summary of per-trial PnL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub trial_count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
    pub median: f64,
    pub p05: f64,
    pub p95: f64,
    /// Trials with PnL strictly above zero.
    pub win_count: usize,
    pub win_rate: f64,
}

impl AggregateStats {
    /// Compute the summary over a non-empty set of trial PnLs.
    pub fn compute(pnls: &[f64]) -> Result<Self, StatsError> {
        Ok(Self {
            trial_count: pnls.len(),
            mean: stats::mean(pnls),
            min: stats::min(pnls)?,
            max: stats::max(pnls)?,
            std_dev: stats::std_dev(pnls),
            median: stats::percentile(pnls, 50.0)?,
            p05: stats::percentile(pnls, 5.0)?,
            p95: stats::percentile(pnls, 95.0)?,
            win_count: stats::count_if(pnls, |pnl| pnl > 0.0),
            win_rate: stats::win_rate(pnls),
        })
    }

    /// Win rate as a percentage in [0, 100].
    pub fn win_pct(&self) -> f64 {
        self.win_rate * 100.0
    }
}

impl fmt::Display for AggregateStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trials:            {}", self.trial_count)?;
        writeln!(f, "Average PnL:       {:.4}", self.mean)?;
        writeln!(f, "Min PnL:           {:.4}", self.min)?;
        writeln!(f, "Max PnL:           {:.4}", self.max)?;
        writeln!(f, "Std dev:           {:.4}", self.std_dev)?;
        writeln!(f, "Median PnL:        {:.4}", self.median)?;
        writeln!(f, "5th / 95th pct:    {:.4} / {:.4}", self.p05, self.p95)?;
        write!(
            f,
            "Profitable trials: {} ({:.2}%)",
            self.win_count,
            self.win_pct()
        )
    }
}
