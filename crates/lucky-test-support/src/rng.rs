//! Test RNGs — deterministic `DeterministicRng` implementations.

use lucky_core::rng::DeterministicRng;

/// An RNG that always returns `min`. Suitable for tests that do not depend on
/// specific values, or that draw from a collapsed range.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_i64_range(&mut self, min: i64, _max: i64) -> i64 {
        min
    }
}

/// An RNG that replays a predetermined sequence, ignoring the requested
/// bounds. Panics when the sequence is exhausted, which makes an unexpected
/// extra retry in a test fail loudly.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<i64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_i64_range(&mut self, _min: i64, _max: i64) -> i64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
