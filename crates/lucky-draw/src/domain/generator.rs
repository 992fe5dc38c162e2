//! Number generation policy.
//!
//! A draw produces a uniformly distributed value inside an inclusive range,
//! never repeating the value produced immediately before it unless the range
//! leaves no alternative.

use lucky_core::error::DomainError;
use lucky_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ledger::HistoryLedger;

/// Outcome of a successful draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// The produced value.
    pub value: i64,
    /// Whether the value should be celebrated by the presenter.
    pub notable: bool,
}

/// Lifecycle state of a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorState {
    /// Nothing drawn since creation or the last reset.
    Idle,
    /// At least one value drawn.
    Active,
}

/// Checks that `min < max`.
///
/// # Errors
///
/// Returns `DomainError::InvalidRange` when `min >= max`.
pub fn validate(min: i64, max: i64) -> Result<(), DomainError> {
    if min >= max {
        return Err(DomainError::InvalidRange { min, max });
    }
    Ok(())
}

/// Number of integers in `[min, max]`.
///
/// Computed in `i128` because `i64::MAX - i64::MIN + 1` does not fit in `i64`.
#[must_use]
pub fn span(min: i64, max: i64) -> i128 {
    i128::from(max) - i128::from(min) + 1
}

/// Returns `true` for values divisible by 7, and for 69 and 99.
#[must_use]
pub fn is_notable(value: i64) -> bool {
    value % 7 == 0 || value == 69 || value == 99
}

/// Draws a value in `[min, max]` that differs from `last_value`.
///
/// Unlike [`validate`], a collapsed range (`min == max`) is accepted: its
/// single value is returned unless it was also the previous draw.
///
/// # Errors
///
/// Returns `DomainError::InvalidRange` if `min > max`, and
/// `DomainError::NoUniqueValue` if the range holds one value equal to
/// `last_value`.
pub fn draw(
    min: i64,
    max: i64,
    last_value: Option<i64>,
    rng: &mut dyn DeterministicRng,
) -> Result<GenerationResult, DomainError> {
    if min > max {
        return Err(DomainError::InvalidRange { min, max });
    }

    let span = span(min, max);
    if span == 1 && last_value == Some(min) {
        return Err(DomainError::NoUniqueValue { value: min });
    }

    // Rejection sampling: expected attempts are span / (span - 1), at most 2.
    let mut attempts: u32 = 0;
    let value = loop {
        attempts += 1;
        let candidate = rng.next_i64_range(min, max);
        if span == 1 || Some(candidate) != last_value {
            break candidate;
        }
    };

    debug!(min, max, value, attempts, "drew value");

    Ok(GenerationResult {
        value,
        notable: is_notable(value),
    })
}

/// Stateful generator for one interactive session.
///
/// Owns the previous value and the history ledger; both change only through
/// [`NumberGenerator::generate`] and [`NumberGenerator::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberGenerator {
    last_value: Option<i64>,
    history: HistoryLedger,
}

impl NumberGenerator {
    /// Creates an idle generator with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the range, draws a value and records it.
    ///
    /// A failed call leaves the previous value and the history untouched.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRange` when `min >= max`, or
    /// `DomainError::NoUniqueValue` if no value other than the previous one
    /// exists.
    pub fn generate(
        &mut self,
        min: i64,
        max: i64,
        rng: &mut dyn DeterministicRng,
    ) -> Result<GenerationResult, DomainError> {
        validate(min, max)?;
        let result = draw(min, max, self.last_value, rng)?;
        self.last_value = Some(result.value);
        self.history.record(result.value);
        Ok(result)
    }

    /// Forgets the previous value and clears the history.
    pub fn reset(&mut self) {
        self.last_value = None;
        self.history.clear();
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> GeneratorState {
        if self.last_value.is_some() {
            GeneratorState::Active
        } else {
            GeneratorState::Idle
        }
    }

    /// The most recently produced value.
    #[must_use]
    pub fn last_value(&self) -> Option<i64> {
        self.last_value
    }

    /// Drawn values, newest first.
    #[must_use]
    pub fn history(&self) -> &[i64] {
        self.history.snapshot()
    }
}
