//! Backtest entry point — validates, runs, and streams per-trial rows.
//!
//! `run_backtest_simulation()` is the single operation a caller needs: the
//! sink is written only after every trial has finished, and any write
//! failure aborts the run with `RunError::Sink`.

use std::io::Write;

use tracing::info;

use crate::config::SimulationConfig;
use crate::export::write_trials_csv;
use crate::monte_carlo::{MonteCarloResult, MonteCarloRunner, RunError};

/// Run a full Monte Carlo backtest and write the per-trial CSV to `sink`.
///
/// The returned result carries both the per-trial PnLs and the aggregate
/// statistics.
pub fn run_backtest_simulation<W: Write>(
    config: &SimulationConfig,
    sink: W,
) -> Result<MonteCarloResult, RunError> {
    run_backtest_simulation_with_progress(config, sink, |_, _| {})
}

/// [`run_backtest_simulation`] with a `(completed, total)` progress callback.
pub fn run_backtest_simulation_with_progress<W, F>(
    config: &SimulationConfig,
    sink: W,
    progress: F,
) -> Result<MonteCarloResult, RunError>
where
    W: Write,
    F: Fn(usize, usize) + Send + Sync,
{
    let runner = MonteCarloRunner::new(*config)?;
    let result = runner.run_with_progress(progress)?;
    write_trials_csv(sink, &result.trials)?;
    info!(rows = result.trials.len(), "trial results written");
    Ok(result)
}
