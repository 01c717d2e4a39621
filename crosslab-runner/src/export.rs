//! Reporting and export — per-trial CSV and the JSON run manifest.
//!
//! - **CSV**: one `trial,pnl` row per trial, PnL at 4 decimal places
//! - **JSON**: a manifest with the config, seed and aggregate statistics
//!
//! The manifest carries a `schema_version` field. Newer versions are
//! rejected on load.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SimulationConfig;
use crate::metrics::AggregateStats;
use crate::monte_carlo::{MonteCarloResult, TrialResult};

/// Current schema version for persisted manifests.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported manifest schema version {found} (max supported: {supported})")]
    UnsupportedSchema { found: u32, supported: u32 },
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Write the per-trial table to `writer` and flush it.
pub fn write_trials_csv<W: Write>(writer: W, trials: &[TrialResult]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["trial", "pnl"])?;
    for t in trials {
        wtr.write_record([t.trial.to_string(), format!("{:.4}", t.pnl)])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render the per-trial table as a CSV string.
pub fn export_trials_csv(trials: &[TrialResult]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_trials_csv(&mut buf, trials)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Create (or truncate) `path` and write the per-trial table into it.
pub fn save_trials_csv(path: &Path, trials: &[TrialResult]) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    write_trials_csv(BufWriter::new(file), trials)
}

// ─── JSON manifest ──────────────────────────────────────────────────

/// Everything needed to reproduce and compare a run, without per-trial rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub config: SimulationConfig,
    pub config_hash: String,
    pub master_seed: u64,
    pub stats: AggregateStats,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl RunManifest {
    pub fn new(config: &SimulationConfig, result: &MonteCarloResult) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            config: *config,
            config_hash: result.config_hash.clone(),
            master_seed: result.master_seed,
            stats: result.stats.clone(),
        }
    }
}

/// Serialize a manifest to pretty JSON.
pub fn export_manifest_json(manifest: &RunManifest) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// Deserialize a manifest, rejecting unknown schema versions.
pub fn import_manifest_json(json: &str) -> Result<RunManifest, ExportError> {
    let manifest: RunManifest = serde_json::from_str(json)?;
    if manifest.schema_version > SCHEMA_VERSION {
        return Err(ExportError::UnsupportedSchema {
            found: manifest.schema_version,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(manifest)
}

/// Write a pretty-JSON manifest to `path`.
pub fn save_manifest(path: &Path, manifest: &RunManifest) -> Result<(), ExportError> {
    let json = export_manifest_json(manifest)?;
    std::fs::write(path, json).map_err(|source| ExportError::Open {
        path: path.to_path_buf(),
        source,
    })
}
