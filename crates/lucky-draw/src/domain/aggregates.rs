//! Aggregate root for a draw session.

use chrono::{DateTime, Utc};
use lucky_core::clock::Clock;
use lucky_core::error::DomainError;
use lucky_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::generator::{GenerationResult, NumberGenerator};

/// One interactive session: a generator plus bookkeeping timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSession {
    /// Session identifier.
    pub id: Uuid,
    /// When the session was started.
    pub created_at: DateTime<Utc>,
    /// When the last successful draw happened.
    pub last_drawn_at: Option<DateTime<Utc>>,
    /// Generator owned exclusively by this session.
    pub(crate) generator: NumberGenerator,
}

impl DrawSession {
    /// Starts a new, idle session.
    #[must_use]
    pub fn new(id: Uuid, clock: &dyn Clock) -> Self {
        Self {
            id,
            created_at: clock.now(),
            last_drawn_at: None,
            generator: NumberGenerator::new(),
        }
    }

    /// Draws a value in `[min, max]` and stamps the draw time.
    ///
    /// # Errors
    ///
    /// Propagates `DomainError::InvalidRange` and `DomainError::NoUniqueValue`
    /// from the generator; the session is unchanged in that case.
    pub fn generate(
        &mut self,
        min: i64,
        max: i64,
        clock: &dyn Clock,
        rng: &mut dyn DeterministicRng,
    ) -> Result<GenerationResult, DomainError> {
        let result = self.generator.generate(min, max, rng)?;
        self.last_drawn_at = Some(clock.now());
        Ok(result)
    }

    /// Returns the session to its idle state.
    pub fn reset(&mut self) {
        self.generator.reset();
        self.last_drawn_at = None;
    }

    /// Read access to the session's generator.
    #[must_use]
    pub fn generator(&self) -> &NumberGenerator {
        &self.generator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use lucky_test_support::{FixedClock, SequenceRng};

    use crate::domain::generator::GeneratorState;

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    #[test]
    fn test_new_session_is_idle_and_stamped() {
        let clock = fixed_clock();
        let session = DrawSession::new(Uuid::new_v4(), &clock);

        assert_eq!(session.created_at, clock.0);
        assert!(session.last_drawn_at.is_none());
        assert_eq!(session.generator().state(), GeneratorState::Idle);
    }

    #[test]
    fn test_generate_stamps_last_drawn_at() {
        let clock = fixed_clock();
        let mut session = DrawSession::new(Uuid::new_v4(), &clock);
        let mut rng = SequenceRng::new(vec![12]);

        let result = session.generate(1, 20, &clock, &mut rng).unwrap();

        assert_eq!(result.value, 12);
        assert_eq!(session.last_drawn_at, Some(clock.0));
        assert_eq!(session.generator().history(), &[12]);
    }

    #[test]
    fn test_failed_generate_does_not_stamp() {
        let clock = fixed_clock();
        let mut session = DrawSession::new(Uuid::new_v4(), &clock);
        let mut rng = SequenceRng::new(vec![]);

        let result = session.generate(10, 3, &clock, &mut rng);

        assert!(result.is_err());
        assert!(session.last_drawn_at.is_none());
    }

    #[test]
    fn test_reset_clears_generator_and_timestamp() {
        let clock = fixed_clock();
        let mut session = DrawSession::new(Uuid::new_v4(), &clock);
        let mut rng = SequenceRng::new(vec![3]);
        session.generate(1, 5, &clock, &mut rng).unwrap();

        session.reset();

        assert!(session.last_drawn_at.is_none());
        assert_eq!(session.generator().state(), GeneratorState::Idle);
        assert!(session.generator().history().is_empty());
    }
}
