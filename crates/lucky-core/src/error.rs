//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Error kinds exposed to presenters, which map them to display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid bounds.
    Range,
    /// No value other than the previous one can be produced.
    Uniqueness,
    /// Unknown session.
    SessionNotFound,
    /// Stale session version.
    ConcurrencyConflict,
    /// Environmental failure outside the core.
    Infrastructure,
}

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The requested bounds do not form a valid range (`min >= max`).
    #[error("invalid range: min {min} must be less than max {max}")]
    InvalidRange {
        /// The requested lower bound.
        min: i64,
        /// The requested upper bound.
        max: i64,
    },

    /// The range holds a single value and it equals the previous draw.
    #[error("no unique value available: range holds only {value}, which was just drawn")]
    NoUniqueValue {
        /// The only representable value.
        value: i64,
    },

    /// A draw session was not found.
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    /// Optimistic concurrency conflict.
    #[error("concurrency conflict on session {session_id}: expected version {expected}, found {actual}")]
    ConcurrencyConflict {
        /// The session that had the conflict.
        session_id: Uuid,
        /// The expected version.
        expected: i64,
        /// The actual version found.
        actual: i64,
    },

    /// An infrastructure error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Returns the language-agnostic kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRange { .. } => ErrorKind::Range,
            Self::NoUniqueValue { .. } => ErrorKind::Uniqueness,
            Self::SessionNotFound(_) => ErrorKind::SessionNotFound,
            Self::ConcurrencyConflict { .. } => ErrorKind::ConcurrencyConflict,
            Self::Infrastructure(_) => ErrorKind::Infrastructure,
        }
    }
}
