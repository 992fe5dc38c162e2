//! Test clock — a `Clock` frozen at one instant.

use chrono::{DateTime, Utc};
use lucky_core::clock::Clock;

/// A clock that always returns the wrapped instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
