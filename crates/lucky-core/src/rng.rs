//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a seeded `StdRng`. In tests, a recorded
//! implementation is injected so that draws are repeatable.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a uniformly distributed `i64` in the range `[min, max]` inclusive.
    ///
    /// Callers guarantee `min <= max`.
    fn next_i64_range(&mut self, min: i64, max: i64) -> i64;
}

/// Production RNG backed by `rand`'s standard generator.
///
/// Not cryptographically secure; draws only need to look random.
#[derive(Debug, Clone)]
pub struct SystemRng {
    inner: StdRng,
}

impl SystemRng {
    /// Creates an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    /// Creates an RNG with a fixed seed, for reproducible sessions.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl DeterministicRng for SystemRng {
    fn next_i64_range(&mut self, min: i64, max: i64) -> i64 {
        self.inner.random_range(min..=max)
    }
}
