//! Monte Carlo runner — simulate, evaluate, aggregate.
//!
//! Each trial owns an RNG derived from the master seed and its 1-based trial
//! index, generates one GBM path, scans it with the crossover strategy, and
//! yields a single realized PnL. Trials share no mutable state, so they run
//! sequentially or on the rayon pool with identical results; aggregation
//! happens once every trial has finished.

use std::sync::atomic::{AtomicUsize, Ordering};

use crosslab_core::engine::{scan_legs, EngineError};
use crosslab_core::simulator::{self, SimulationError};
use crosslab_core::stats::StatsError;
use crosslab_core::{MaCrossover, RngHierarchy};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigError, SimulationConfig};
use crate::export::ExportError;
use crate::metrics::AggregateStats;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("price simulation failed in trial {trial}: {source}")]
    Simulation {
        trial: usize,
        #[source]
        source: SimulationError,
    },

    #[error("strategy evaluation failed in trial {trial}: {source}")]
    Engine {
        trial: usize,
        #[source]
        source: EngineError,
    },

    #[error("failed to aggregate trial results: {0}")]
    Stats(#[from] StatsError),

    #[error("failed to write trial results: {0}")]
    Sink(#[from] ExportError),
}

/// Outcome of one simulate-then-evaluate cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// 1-based trial index.
    pub trial: usize,
    pub pnl: f64,
    /// Signal transitions recorded on the path.
    pub legs: usize,
}

impl TrialResult {
    /// Positions closed by a later transition.
    pub fn closed_trades(&self) -> usize {
        self.legs.saturating_sub(1)
    }
}

/// Per-trial results (ordered by trial index) plus their aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloResult {
    pub config_hash: String,
    pub master_seed: u64,
    pub trials: Vec<TrialResult>,
    pub stats: AggregateStats,
}

impl MonteCarloResult {
    pub fn pnls(&self) -> Vec<f64> {
        self.trials.iter().map(|t| t.pnl).collect()
    }
}

/// Drives independent trials for one validated configuration.
#[derive(Debug, Clone)]
pub struct MonteCarloRunner {
    config: SimulationConfig,
    strategy: MaCrossover,
    seeds: RngHierarchy,
}

impl MonteCarloRunner {
    /// Validate `config` and fix the master seed.
    ///
    /// Without a configured seed the master seed is drawn from OS entropy
    /// here, once, and reported in the result.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let windows = config.validate()?;
        let seeds = config
            .trials
            .seed
            .map_or_else(RngHierarchy::from_entropy, RngHierarchy::new);
        Ok(Self {
            config,
            strategy: MaCrossover::new(windows),
            seeds,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn master_seed(&self) -> u64 {
        self.seeds.master_seed()
    }

    /// Run a single trial. `trial` is 1-based.
    pub fn run_trial(&self, trial: usize) -> Result<TrialResult, RunError> {
        let mut rng = self.seeds.rng_for(trial as u64);
        let path_length = self.config.trials.path_length;
        let path = simulator::generate(&self.config.price, path_length, &mut rng)
            .map_err(|source| RunError::Simulation { trial, source })?;
        let ledger = scan_legs(&path, &self.strategy, self.config.strategy.step)
            .map_err(|source| RunError::Engine { trial, source })?;

        let result = TrialResult {
            trial,
            pnl: ledger.realized_pnl(),
            legs: ledger.len(),
        };
        debug!(trial, pnl = result.pnl, legs = result.legs, "trial complete");
        Ok(result)
    }

    pub fn run(&self) -> Result<MonteCarloResult, RunError> {
        self.run_with_progress(|_, _| {})
    }

    /// Run all trials, calling `progress(completed, total)` after each one.
    ///
    /// In parallel mode the callback fires from worker threads and
    /// `completed` counts finished trials, not trial indices.
    pub fn run_with_progress<F>(&self, progress: F) -> Result<MonteCarloResult, RunError>
    where
        F: Fn(usize, usize) + Send + Sync,
    {
        let total = self.config.trials.num_trials;
        let config_hash = self.config.config_hash();
        info!(
            trials = total,
            path_length = self.config.trials.path_length,
            short_window = self.config.strategy.short_window,
            long_window = self.config.strategy.long_window,
            step = self.config.strategy.step,
            master_seed = self.master_seed(),
            parallel = self.config.trials.parallel,
            config_hash = %config_hash,
            "starting Monte Carlo run"
        );

        let completed = AtomicUsize::new(0);
        let run_one = |trial: usize| -> Result<TrialResult, RunError> {
            let result = self.run_trial(trial)?;
            progress(completed.fetch_add(1, Ordering::Relaxed) + 1, total);
            Ok(result)
        };

        let trials: Vec<TrialResult> = if self.config.trials.parallel {
            (1..=total)
                .into_par_iter()
                .map(run_one)
                .collect::<Result<Vec<_>, RunError>>()?
        } else {
            (1..=total)
                .map(run_one)
                .collect::<Result<Vec<_>, RunError>>()?
        };

        let pnls: Vec<f64> = trials.iter().map(|t| t.pnl).collect();
        let stats = AggregateStats::compute(&pnls)?;
        info!(
            mean = stats.mean,
            min = stats.min,
            max = stats.max,
            win_rate = stats.win_rate,
            "Monte Carlo run complete"
        );

        Ok(MonteCarloResult {
            config_hash,
            master_seed: self.master_seed(),
            trials,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{StrategyConfig, TrialsConfig};
    use crosslab_core::GbmParams;

    fn config(parallel: bool) -> SimulationConfig {
        SimulationConfig {
            trials: TrialsConfig {
                num_trials: 40,
                path_length: 600,
                seed: Some(42),
                parallel,
            },
            strategy: StrategyConfig {
                short_window: 5,
                long_window: 20,
                step: 2,
            },
            price: GbmParams::default(),
        }
    }

    #[test]
    fn trials_are_one_based_and_ordered() {
        let result = MonteCarloRunner::new(config(true)).unwrap().run().unwrap();
        let indices: Vec<usize> = result.trials.iter().map(|t| t.trial).collect();
        assert_eq!(indices, (1..=40).collect::<Vec<_>>());
    }

    #[test]
    fn parallel_matches_sequential() {
        let par = MonteCarloRunner::new(config(true)).unwrap().run().unwrap();
        let seq = MonteCarloRunner::new(config(false)).unwrap().run().unwrap();
        assert_eq!(par.trials, seq.trials);
        assert_eq!(par.stats, seq.stats);
        assert_eq!(par.config_hash, seq.config_hash);
    }

    #[test]
    fn run_trial_is_replayable() {
        let runner = MonteCarloRunner::new(config(false)).unwrap();
        assert_eq!(runner.run_trial(7).unwrap(), runner.run_trial(7).unwrap());
    }

    #[test]
    fn progress_reports_every_trial() {
        let calls = AtomicUsize::new(0);
        let max_seen = AtomicUsize::new(0);
        MonteCarloRunner::new(config(true))
            .unwrap()
            .run_with_progress(|done, total| {
                assert_eq!(total, 40);
                calls.fetch_add(1, Ordering::Relaxed);
                max_seen.fetch_max(done, Ordering::Relaxed);
            })
            .unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 40);
        assert_eq!(max_seen.load(Ordering::Relaxed), 40);
    }

    #[test]
    fn entropy_seed_is_reported() {
        let mut c = config(false);
        c.trials.seed = None;
        c.trials.num_trials = 3;
        let runner = MonteCarloRunner::new(c).unwrap();
        let result = runner.run().unwrap();
        assert_eq!(result.master_seed, runner.master_seed());

        // Replaying with the reported seed reproduces the run.
        c.trials.seed = Some(result.master_seed);
        let replay = MonteCarloRunner::new(c).unwrap().run().unwrap();
        assert_eq!(replay.trials, result.trials);
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let mut c = config(false);
        c.strategy.long_window = 5;
        assert!(matches!(
            MonteCarloRunner::new(c),
            Err(ConfigError::Windows(_))
        ));
    }

    #[test]
    fn path_shorter_than_long_window_yields_zero_pnl() {
        let mut c = config(false);
        c.trials.path_length = 10;
        let result = MonteCarloRunner::new(c).unwrap().run().unwrap();
        assert!(result.trials.iter().all(|t| t.pnl == 0.0 && t.legs == 0));
        assert_eq!(result.stats.win_rate, 0.0);
    }
}
