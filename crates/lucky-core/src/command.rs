//! Command abstractions.

use uuid::Uuid;

/// Trait implemented by every command sent to the draw context.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted command name, used in log fields.
    fn command_type(&self) -> &'static str;

    /// Correlation ID to trace this command across log lines.
    fn correlation_id(&self) -> Uuid;
}
