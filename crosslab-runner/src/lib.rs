//! CrossLab Runner — Monte Carlo orchestration, configuration, and reporting.
//!
//! This crate builds on `crosslab-core` to provide:
//! - TOML run configuration with up-front validation
//! - Monte Carlo runner (sequential or rayon-parallel, seed-reproducible)
//! - Aggregate PnL statistics and the console summary
//! - Per-trial CSV export and the JSON run manifest
//! - The `run_backtest_simulation` entry operation

pub mod config;
pub mod export;
pub mod metrics;
pub mod monte_carlo;
pub mod runner;

pub use config::{ConfigError, SimulationConfig, StrategyConfig, TrialsConfig};
pub use export::{
    export_manifest_json, export_trials_csv, import_manifest_json, save_manifest,
    save_trials_csv, write_trials_csv, ExportError, RunManifest,
};
pub use metrics::AggregateStats;
pub use monte_carlo::{MonteCarloResult, MonteCarloRunner, RunError, TrialResult};
pub use runner::{run_backtest_simulation, run_backtest_simulation_with_progress};
