//! Query handlers for the draw context.
//!
//! Queries load a session snapshot and return a read-only view DTO.

use chrono::{DateTime, Utc};
use lucky_core::error::DomainError;
use lucky_core::repository::StoredSnapshot;
use serde::Serialize;
use uuid::Uuid;

use crate::application::command_handlers::{SessionRepository, load_session};
use crate::domain::aggregates::DrawSession;
use crate::domain::generator::GeneratorState;

/// Read-only view of a draw session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// The session identifier.
    pub session_id: Uuid,
    /// Whether anything has been drawn since the last reset.
    pub state: GeneratorState,
    /// The most recently drawn value.
    pub last_value: Option<i64>,
    /// Drawn values, newest first, at most ten.
    pub history: Vec<i64>,
    /// Current snapshot version.
    pub version: i64,
    /// When the session was started.
    pub created_at: DateTime<Utc>,
    /// When the last successful draw happened.
    pub last_drawn_at: Option<DateTime<Utc>>,
}

impl From<&StoredSnapshot<DrawSession>> for SessionView {
    fn from(snapshot: &StoredSnapshot<DrawSession>) -> Self {
        let session = &snapshot.state;
        let generator = session.generator();
        Self {
            session_id: session.id,
            state: generator.state(),
            last_value: generator.last_value(),
            history: generator.history().to_vec(),
            version: snapshot.version,
            created_at: session.created_at,
            last_drawn_at: session.last_drawn_at,
        }
    }
}

/// Retrieves a draw session by its ID.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if no session exists for the ID.
pub async fn get_session_by_id(
    session_id: Uuid,
    repo: &SessionRepository,
) -> Result<SessionView, DomainError> {
    let snapshot = load_session(session_id, repo).await?;
    Ok(SessionView::from(&snapshot))
}
