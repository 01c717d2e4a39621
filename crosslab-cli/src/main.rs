//! CrossLab CLI — Monte Carlo backtests of a moving-average crossover.
//!
//! Commands:
//! - `run` — simulate GBM paths, trade the crossover, write per-trial CSV
//! - `config` — print the default configuration as TOML

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crosslab_runner::{
    run_backtest_simulation_with_progress, save_manifest, MonteCarloResult, RunManifest,
    SimulationConfig,
};

const DEFAULT_LOG_FILTER: &str = "crosslab=info";

#[derive(Parser)]
#[command(
    name = "crosslab",
    about = "CrossLab CLI — Monte Carlo moving-average crossover backtester"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Monte Carlo backtest. Flags override values from --config.
    Run(RunArgs),
    /// Print the default configuration as TOML.
    Config,
}

#[derive(clap::Args)]
struct RunArgs {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of independent trials.
    #[arg(long)]
    trials: Option<usize>,

    /// Steps per simulated price path.
    #[arg(long)]
    path_length: Option<usize>,

    /// Short moving-average window.
    #[arg(long)]
    short: Option<usize>,

    /// Long moving-average window.
    #[arg(long)]
    long: Option<usize>,

    /// Bars between signal evaluations.
    #[arg(long)]
    step: Option<usize>,

    /// Mean of the per-step return.
    #[arg(long, allow_negative_numbers = true)]
    drift: Option<f64>,

    /// Standard deviation of the per-step return.
    #[arg(long)]
    volatility: Option<f64>,

    /// Starting price of every path.
    #[arg(long)]
    initial_price: Option<f64>,

    /// Master seed. Drawn from OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Run trials on the current thread only.
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// Per-trial CSV destination.
    #[arg(long, default_value = "output.csv")]
    output: PathBuf,

    /// Also write a JSON run manifest here.
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Print the aggregate statistics as JSON instead of the text summary.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run_cmd(args),
        Commands::Config => {
            print!("{}", SimulationConfig::default().to_toml()?);
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_cmd(args: RunArgs) -> Result<()> {
    let config = build_config(&args)?;

    let result = run_to_output(&config, &args.output)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.stats)?);
    } else {
        print_summary(&result);
    }
    println!("Per-trial PnL written to: {}", args.output.display());

    if let Some(path) = &args.manifest {
        let manifest = RunManifest::new(&config, &result);
        save_manifest(path, &manifest)
            .with_context(|| format!("cannot write manifest {}", path.display()))?;
        println!("Manifest written to:      {}", path.display());
    }

    Ok(())
}

/// Run the backtest into memory and write `output` only once every trial
/// has succeeded, so a failed run leaves any existing file untouched.
fn run_to_output(config: &SimulationConfig, output: &Path) -> Result<MonteCarloResult> {
    let every = (config.trials.num_trials / 10).max(1);
    let progress = |done: usize, total: usize| {
        if done % every == 0 || done == total {
            info!(done, total, "trials finished");
        }
    };

    let mut csv = Vec::new();
    let result = run_backtest_simulation_with_progress(config, &mut csv, progress)
        .context("backtest run failed")?;
    std::fs::write(output, csv)
        .with_context(|| format!("cannot write output file {}", output.display()))?;
    Ok(result)
}

/// Layer CLI overrides on top of the TOML file (or the defaults).
fn build_config(args: &RunArgs) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)
            .with_context(|| format!("cannot load config {}", path.display()))?,
        None => SimulationConfig::default(),
    };

    if let Some(n) = args.trials {
        config.trials.num_trials = n;
    }
    if let Some(n) = args.path_length {
        config.trials.path_length = n;
    }
    if let Some(seed) = args.seed {
        config.trials.seed = Some(seed);
    }
    if args.sequential {
        config.trials.parallel = false;
    }
    if let Some(n) = args.short {
        config.strategy.short_window = n;
    }
    if let Some(n) = args.long {
        config.strategy.long_window = n;
    }
    if let Some(n) = args.step {
        config.strategy.step = n;
    }
    if let Some(x) = args.drift {
        config.price.drift = x;
    }
    if let Some(x) = args.volatility {
        config.price.volatility = x;
    }
    if let Some(x) = args.initial_price {
        config.price.initial_price = x;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn print_summary(result: &MonteCarloResult) {
    println!();
    println!("=== Monte Carlo Result ===");
    println!("Master seed:       {}", result.master_seed);
    println!("Config hash:       {}", &result.config_hash[..16]);
    println!();
    println!("{}", result.stats);
    println!();
}
