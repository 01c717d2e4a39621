//! Deterministic RNG hierarchy.
//!
//! A master seed generates one sub-seed per trial. Sub-seeds are derived via
//! BLAKE3 hashing, independently of thread scheduling order, so a Monte Carlo
//! run produces identical trials regardless of thread count.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Domain tag mixed into every sub-seed so trial streams never collide with
/// seeds derived for other purposes from the same master seed.
const TRIAL_STREAM: &[u8] = b"crosslab/trial";

/// Deterministic RNG hierarchy.
///
/// The master seed is expanded into per-trial sub-seeds using BLAKE3.
/// Because derivation is hash-based (not order-dependent), the same master
/// seed produces identical sub-seeds regardless of the order in which trials
/// are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngHierarchy {
    master_seed: u64,
}

impl RngHierarchy {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    /// Hierarchy with a master seed drawn from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive a deterministic sub-seed for a trial.
    pub fn sub_seed(&self, trial: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(TRIAL_STREAM);
        hasher.update(&trial.to_le_bytes());
        let hash = hasher.finalize();
        let mut seed = [0u8; 8];
        seed.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(seed)
    }

    /// Create a seeded StdRng for a trial.
    pub fn rng_for(&self, trial: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(trial))
    }
}
