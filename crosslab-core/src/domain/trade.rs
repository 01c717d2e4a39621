//! Trade history — recorded signal transitions and the positions they close.

use super::signal::Signal;
use serde::{Deserialize, Serialize};

/// A recorded signal transition: the position flips to `signal` at `price`.
///
/// Legs are only recorded for non-flat signals that differ from the
/// currently held one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeLeg {
    pub bar_index: usize,
    pub price: f64,
    pub signal: Signal,
}

/// A position opened by one leg and closed by the next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosedTrade {
    pub side: Signal,
    pub entry_bar: usize,
    pub entry_price: f64,
    pub exit_bar: usize,
    pub exit_price: f64,
    pub pnl: f64,
}

impl ClosedTrade {
    pub fn bars_held(&self) -> usize {
        self.exit_bar.saturating_sub(self.entry_bar)
    }

    pub fn is_winner(&self) -> bool {
        self.pnl > 0.0
    }
}

/// Ordered legs of one trial. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeLedger {
    legs: Vec<TradeLeg>,
}

impl TradeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a transition. Flat signals and repeats of the current signal
    /// are ignored; returns whether a leg was appended.
    pub fn record(&mut self, bar_index: usize, price: f64, signal: Signal) -> bool {
        if signal.is_flat() || signal == self.current_signal() {
            return false;
        }
        self.legs.push(TradeLeg {
            bar_index,
            price,
            signal,
        });
        true
    }

    /// Signal of the most recent leg, or Flat before any leg.
    pub fn current_signal(&self) -> Signal {
        self.legs.last().map_or(Signal::Flat, |leg| leg.signal)
    }

    pub fn legs(&self) -> &[TradeLeg] {
        &self.legs
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Positions closed by a later leg. The position opened by the final
    /// leg is still open and does not appear here.
    pub fn closed_trades(&self) -> Vec<ClosedTrade> {
        self.legs
            .windows(2)
            .map(|pair| {
                let (entry, exit) = (pair[0], pair[1]);
                ClosedTrade {
                    side: entry.signal,
                    entry_bar: entry.bar_index,
                    entry_price: entry.price,
                    exit_bar: exit.bar_index,
                    exit_price: exit.price,
                    pnl: entry.signal.pnl_sign() * (exit.price - entry.price),
                }
            })
            .collect()
    }

    /// Sum of PnL over closed positions. Zero with fewer than two legs.
    pub fn realized_pnl(&self) -> f64 {
        self.legs
            .windows(2)
            .map(|pair| pair[0].signal.pnl_sign() * (pair[1].price - pair[0].price))
            .sum()
    }
}
