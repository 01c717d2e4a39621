//! Serializable Monte Carlo run configuration.
//!
//! Loaded from TOML with three sections, each optional and falling back to
//! the defaults below:
//!
//! ```toml
//! [trials]
//! num_trials = 10000
//! path_length = 100000
//! seed = 42          # omit for an entropy-drawn master seed
//! parallel = true
//!
//! [strategy]
//! short_window = 50
//! long_window = 150
//! step = 5
//!
//! [price]
//! drift = 0.0
//! volatility = 0.01
//! initial_price = 100.0
//! ```

use std::path::{Path, PathBuf};

use crosslab_core::domain::{WindowError, WindowSpec};
use crosslab_core::GbmParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("num_trials must be >= 1")]
    ZeroTrials,

    #[error("path_length must be >= 1")]
    ZeroPathLength,

    #[error("invalid window pair: {0}")]
    Windows(#[from] WindowError),

    #[error("step must be >= 1")]
    ZeroStep,

    #[error("drift must be finite (got {0})")]
    InvalidDrift(f64),

    #[error("volatility must be finite and >= 0 (got {0})")]
    InvalidVolatility(f64),

    #[error("initial_price must be finite and > 0 (got {0})")]
    InvalidInitialPrice(f64),

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to render config TOML: {0}")]
    Render(#[from] toml::ser::Error),
}

/// How many trials to run and how.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrialsConfig {
    pub num_trials: usize,
    /// Number of simulated prices per trial.
    pub path_length: usize,
    /// Master seed for the per-trial RNG hierarchy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Spread trials over the rayon thread pool.
    pub parallel: bool,
}

impl Default for TrialsConfig {
    fn default() -> Self {
        Self {
            num_trials: 10_000,
            path_length: 100_000,
            seed: None,
            parallel: true,
        }
    }
}

/// Crossover windows and scan decimation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrategyConfig {
    pub short_window: usize,
    pub long_window: usize,
    /// Evaluate the signal on every `step`-th bar.
    pub step: usize,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            short_window: 50,
            long_window: 150,
            step: 5,
        }
    }
}

/// Complete configuration for one Monte Carlo run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub trials: TrialsConfig,
    pub strategy: StrategyConfig,
    pub price: GbmParams,
}

impl SimulationConfig {
    /// Load and validate a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject malformed configurations before any trial runs.
    ///
    /// Returns the validated window pair on success.
    pub fn validate(&self) -> Result<WindowSpec, ConfigError> {
        if self.trials.num_trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        if self.trials.path_length == 0 {
            return Err(ConfigError::ZeroPathLength);
        }
        let windows = WindowSpec::new(self.strategy.short_window, self.strategy.long_window)?;
        if self.strategy.step == 0 {
            return Err(ConfigError::ZeroStep);
        }

        let price = &self.price;
        if !price.drift.is_finite() {
            return Err(ConfigError::InvalidDrift(price.drift));
        }
        if !price.volatility.is_finite() || price.volatility < 0.0 {
            return Err(ConfigError::InvalidVolatility(price.volatility));
        }
        if !price.initial_price.is_finite() || price.initial_price <= 0.0 {
            return Err(ConfigError::InvalidInitialPrice(price.initial_price));
        }
        Ok(windows)
    }

    /// Deterministic BLAKE3 identity of the parameters that shape results.
    ///
    /// `parallel` is excluded: it changes scheduling, never the trials.
    pub fn config_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.trials.num_trials as u64).to_le_bytes());
        hasher.update(&(self.trials.path_length as u64).to_le_bytes());
        match self.trials.seed {
            Some(seed) => {
                hasher.update(&[1]);
                hasher.update(&seed.to_le_bytes());
            }
            None => {
                hasher.update(&[0]);
            }
        }
        hasher.update(&(self.strategy.short_window as u64).to_le_bytes());
        hasher.update(&(self.strategy.long_window as u64).to_le_bytes());
        hasher.update(&(self.strategy.step as u64).to_le_bytes());
        hasher.update(&self.price.drift.to_le_bytes());
        hasher.update(&self.price.volatility.to_le_bytes());
        hasher.update(&self.price.initial_price.to_le_bytes());
        hasher.finalize().to_hex().to_string()
    }
}
