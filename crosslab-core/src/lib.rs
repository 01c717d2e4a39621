//! CrossLab Core — price simulation, crossover signals, PnL accounting, statistics.
//!
//! This crate contains the strategy-evaluation engine:
//! - Domain types (price paths, signals, trade legs, window pairs)
//! - Geometric Brownian Motion path simulator
//! - Simple moving average and the dual-MA crossover signal
//! - Trade-triggered PnL accumulator
//! - Summary statistics shared with the Monte Carlo runner
//! - Deterministic per-trial RNG hierarchy
//!
//! Everything here is synchronous and free of I/O.

pub mod domain;
pub mod engine;
pub mod indicators;
pub mod rng;
pub mod signal;
pub mod simulator;
pub mod stats;

pub use domain::{ClosedTrade, PricePath, Signal, TradeLeg, TradeLedger, WindowSpec};
pub use engine::EngineError;
pub use rng::RngHierarchy;
pub use signal::{MaCrossover, SignalGenerator};
pub use simulator::{GbmParams, SimulationError};
