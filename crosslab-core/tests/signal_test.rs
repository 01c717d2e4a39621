//! Integration tests for the crossover signal.
//!
//! Tests:
//! 1. Look-ahead contamination: truncated and full paths produce identical
//!    signals for overlapping indices.
//! 2. Warmup: paths too short for the long window never fail.
//! 3. Window-pair edge cases: equal and swapped windows.

use crosslab_core::domain::{Signal, WindowSpec};
use crosslab_core::indicators::IndicatorError;
use crosslab_core::signal::{crossover_signal, MaCrossover, SignalGenerator};
use crosslab_core::simulator::{generate, GbmParams};
use crosslab_core::RngHierarchy;

fn simulated_path(seed: u64, steps: usize) -> Vec<f64> {
    let mut rng = RngHierarchy::new(seed).rng_for(0);
    generate(&GbmParams::default(), steps, &mut rng)
        .unwrap()
        .into_inner()
}

// ── 1. Look-ahead ────────────────────────────────────────────────────

#[test]
fn truncated_path_gives_identical_signals() {
    let full = simulated_path(11, 400);
    let truncated = &full[..250];
    let sig = MaCrossover::new(WindowSpec::new(10, 40).unwrap());

    for index in 0..truncated.len() {
        assert_eq!(
            sig.evaluate(truncated, index),
            sig.evaluate(&full, index),
            "signal at {index} depends on future prices"
        );
    }
}

#[test]
fn simulated_path_produces_both_directions() {
    let path = simulated_path(3, 2_000);
    let sig = MaCrossover::new(WindowSpec::new(5, 50).unwrap());
    let signals: Vec<Signal> = (0..path.len())
        .map(|i| sig.evaluate(&path, i).unwrap())
        .collect();
    assert!(signals.contains(&Signal::Long));
    assert!(signals.contains(&Signal::Short));
    assert!(signals[..49].iter().all(|s| s.is_flat()));
}

// ── 2. Warmup ────────────────────────────────────────────────────────

#[test]
fn path_too_short_for_long_window_is_flat_not_error() {
    let path = [100.0, 101.0, 102.0, 103.0];
    for index in 0..path.len() {
        assert_eq!(crossover_signal(&path, 2, 150, index), Ok(Signal::Flat));
    }
}

#[test]
fn first_evaluated_index_is_long_minus_one() {
    let path: Vec<f64> = (0..20).map(|i| 50.0 + i as f64).collect();
    assert_eq!(crossover_signal(&path, 3, 10, 8), Ok(Signal::Flat));
    assert_eq!(crossover_signal(&path, 3, 10, 9), Ok(Signal::Long));
}

#[test]
fn out_of_range_past_warmup_is_reported() {
    let path = [100.0; 5];
    assert_eq!(
        crossover_signal(&path, 2, 3, 5),
        Err(IndicatorError::OutOfRange {
            end_index: 5,
            window: 2,
            len: 5
        })
    );
}

// ── 3. Window-pair edge cases ────────────────────────────────────────

#[test]
fn equal_windows_boundary_is_rejected_by_window_spec_but_flat_raw() {
    assert!(WindowSpec::new(10, 10).is_err());
    let path = simulated_path(8, 100);
    for index in 0..path.len() {
        assert_eq!(crossover_signal(&path, 10, 10, index), Ok(Signal::Flat));
    }
}

#[test]
fn swapped_windows_rejected_by_window_spec_but_mirror_raw() {
    assert!(WindowSpec::new(40, 10).is_err());
    let path = simulated_path(9, 300);
    for index in 39..path.len() {
        let normal = crossover_signal(&path, 10, 40, index).unwrap();
        let swapped = crossover_signal(&path, 40, 10, index).unwrap();
        let mirrored = match normal {
            Signal::Long => Signal::Short,
            Signal::Short => Signal::Long,
            Signal::Flat => Signal::Flat,
        };
        assert_eq!(swapped, mirrored, "index {index}");
    }
}
