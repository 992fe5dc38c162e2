//! Commands for the draw context.

use lucky_core::command::Command;
use uuid::Uuid;

/// Command to start a new draw session.
#[derive(Debug, Clone)]
pub struct StartSession {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Identifier to assign to the new session.
    pub session_id: Uuid,
}

impl Command for StartSession {
    fn command_type(&self) -> &'static str {
        "draw.start_session"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to draw a number in `[min, max]`.
#[derive(Debug, Clone)]
pub struct GenerateNumber {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session to draw in.
    pub session_id: Uuid,
    /// Inclusive lower bound.
    pub min: i64,
    /// Inclusive upper bound.
    pub max: i64,
}

impl Command for GenerateNumber {
    fn command_type(&self) -> &'static str {
        "draw.generate_number"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to reset a session to idle.
#[derive(Debug, Clone)]
pub struct ResetSession {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session to reset.
    pub session_id: Uuid,
}

impl Command for ResetSession {
    fn command_type(&self) -> &'static str {
        "draw.reset_session"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to end a session and discard its state.
#[derive(Debug, Clone)]
pub struct EndSession {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session to end.
    pub session_id: Uuid,
}

impl Command for EndSession {
    fn command_type(&self) -> &'static str {
        "draw.end_session"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
