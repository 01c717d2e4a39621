//! Domain types for CrossLab

pub mod price_path;
pub mod signal;
pub mod trade;
pub mod window;

pub use price_path::PricePath;
pub use signal::{Signal, SignalValueError};
pub use trade::{ClosedTrade, TradeLeg, TradeLedger};
pub use window::{WindowError, WindowSpec};
