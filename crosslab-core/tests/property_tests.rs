//! Property tests for engine invariants.
//!
//! Uses proptest to verify:
//! 1. Moving average equals the arithmetic mean of exactly `window` values
//! 2. Signals are Flat before the long window has history, on any path
//! 3. Ledger bookkeeping — legs alternate, PnL equals the sum of closed trades
//! 4. Simulator reproducibility — same seed, same path

use crosslab_core::domain::{Signal, WindowSpec};
use crosslab_core::engine::scan_legs;
use crosslab_core::indicators::moving_average;
use crosslab_core::signal::{crossover_signal, MaCrossover};
use crosslab_core::simulator::{generate, GbmParams};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_path() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(50.0..150.0_f64, 1..200)
}

fn arb_windows() -> impl Strategy<Value = (usize, usize)> {
    (1usize..20).prop_flat_map(|short| (Just(short), (short + 1)..40))
}

/// Window pair plus an index that is still inside the long window's warmup.
fn arb_warmup_index() -> impl Strategy<Value = (usize, usize, usize)> {
    arb_windows().prop_flat_map(|(short, long)| (Just(short), Just(long), 0..long - 1))
}

// ── 1. Moving average ────────────────────────────────────────────────

proptest! {
    #[test]
    fn moving_average_is_window_mean(
        path in arb_path(),
        window in 1usize..50,
        offset in 0usize..200,
    ) {
        prop_assume!(window <= path.len());
        let end_index = (window - 1 + offset).min(path.len() - 1);

        let ma = moving_average(&path, end_index, window).unwrap();
        let slice = &path[end_index + 1 - window..=end_index];
        prop_assert_eq!(slice.len(), window);
        let expected = slice.iter().sum::<f64>() / window as f64;
        prop_assert!((ma - expected).abs() < 1e-9);
    }

    #[test]
    fn moving_average_rejects_short_history(
        path in arb_path(),
        window in 2usize..50,
    ) {
        let end_index = (window - 2).min(path.len() - 1);
        prop_assert!(moving_average(&path, end_index, window).is_err());
    }
}

// ── 2. Warmup ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn flat_before_long_window(
        path in arb_path(),
        (short, long, index) in arb_warmup_index(),
    ) {
        prop_assert_eq!(crossover_signal(&path, short, long, index), Ok(Signal::Flat));
    }
}

// ── 3. Ledger bookkeeping ────────────────────────────────────────────

proptest! {
    #[test]
    fn legs_alternate_and_pnl_matches_closed_trades(
        path in arb_path(),
        (short, long) in arb_windows(),
        step in 1usize..6,
    ) {
        let gen = MaCrossover::new(WindowSpec::new(short, long).unwrap());
        let ledger = scan_legs(&path, &gen, step).unwrap();

        for pair in ledger.legs().windows(2) {
            prop_assert_ne!(pair[0].signal, pair[1].signal);
        }
        prop_assert!(ledger.legs().iter().all(|l| !l.signal.is_flat()));

        let from_trades: f64 = ledger.closed_trades().iter().map(|t| t.pnl).sum();
        prop_assert!((from_trades - ledger.realized_pnl()).abs() < 1e-9);
        if ledger.len() < 2 {
            prop_assert_eq!(ledger.realized_pnl(), 0.0);
        }
    }
}

// ── 4. Simulator reproducibility ─────────────────────────────────────

proptest! {
    #[test]
    fn same_seed_same_path(
        seed in any::<u64>(),
        drift in -0.01..0.01_f64,
        volatility in 0.0..0.05_f64,
        steps in 0usize..300,
    ) {
        let params = GbmParams { drift, volatility, initial_price: 100.0 };
        let a = generate(&params, steps, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = generate(&params, steps, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a.len(), steps);
        prop_assert_eq!(a, b);
    }
}
