//! Command handlers for the draw context.
//!
//! Each handler loads the session snapshot, runs the domain operation, and
//! saves the new snapshot with optimistic concurrency. Domain failures return
//! before anything is saved.

use std::sync::Mutex;

use chrono::Duration;
use lucky_core::clock::Clock;
use lucky_core::command::Command;
use lucky_core::error::DomainError;
use lucky_core::repository::{SnapshotRepository, StoredSnapshot};
use lucky_core::rng::DeterministicRng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::aggregates::DrawSession;
use crate::domain::commands::{EndSession, GenerateNumber, ResetSession, StartSession};
use crate::domain::generator::GenerationResult;

/// Repository holding draw session snapshots.
pub type SessionRepository = dyn SnapshotRepository<DrawSession>;

/// Result of a successful `GenerateNumber` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The drawn value and its notability.
    pub result: GenerationResult,
    /// Session history after the draw, newest first.
    pub history: Vec<i64>,
    /// Session version after the draw.
    pub version: i64,
}

/// Loads a session snapshot.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session does not exist.
pub(crate) async fn load_session(
    session_id: Uuid,
    repo: &SessionRepository,
) -> Result<StoredSnapshot<DrawSession>, DomainError> {
    repo.load(session_id)
        .await?
        .ok_or(DomainError::SessionNotFound(session_id))
}

async fn save_next(
    loaded_version: i64,
    session: DrawSession,
    clock: &dyn Clock,
    repo: &SessionRepository,
) -> Result<StoredSnapshot<DrawSession>, DomainError> {
    let snapshot = StoredSnapshot {
        aggregate_id: session.id,
        version: loaded_version + 1,
        saved_at: clock.now(),
        state: session,
    };
    repo.save(loaded_version, snapshot.clone()).await?;
    Ok(snapshot)
}

/// Handles the `StartSession` command: creates an idle session and stores it.
///
/// # Errors
///
/// Returns `DomainError` if the session cannot be saved (including an ID
/// that is already taken).
pub async fn handle_start_session(
    command: &StartSession,
    clock: &dyn Clock,
    repo: &SessionRepository,
) -> Result<StoredSnapshot<DrawSession>, DomainError> {
    let session = DrawSession::new(command.session_id, clock);
    let snapshot = save_next(0, session, clock, repo).await?;

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        session_id = %command.session_id,
        "session started"
    );

    Ok(snapshot)
}

/// Handles the `GenerateNumber` command: loads the session, draws a value,
/// and stores the updated session.
///
/// The `Mutex` is locked only around the synchronous domain call to avoid
/// holding a `MutexGuard` across await points.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound`, `DomainError::InvalidRange`,
/// `DomainError::NoUniqueValue`, or an error from the repository.
pub async fn handle_generate_number(
    command: &GenerateNumber,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
    repo: &SessionRepository,
) -> Result<DrawOutcome, DomainError> {
    let loaded = load_session(command.session_id, repo).await?;
    let mut session = loaded.state;

    let result = {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        session.generate(command.min, command.max, clock, &mut *rng_guard)?
    };

    let saved = save_next(loaded.version, session, clock, repo).await?;

    debug!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        session_id = %command.session_id,
        value = result.value,
        notable = result.notable,
        "number generated"
    );

    Ok(DrawOutcome {
        result,
        history: saved.state.generator().history().to_vec(),
        version: saved.version,
    })
}

/// Handles the `ResetSession` command: clears the previous value and the
/// history, then stores the session.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` or an error from the repository.
pub async fn handle_reset_session(
    command: &ResetSession,
    clock: &dyn Clock,
    repo: &SessionRepository,
) -> Result<StoredSnapshot<DrawSession>, DomainError> {
    let loaded = load_session(command.session_id, repo).await?;
    let mut session = loaded.state;
    session.reset();

    let saved = save_next(loaded.version, session, clock, repo).await?;

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        session_id = %command.session_id,
        "session reset"
    );

    Ok(saved)
}

/// Handles the `EndSession` command: removes the session from the store.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session does not exist, or
/// an error from the repository.
pub async fn handle_end_session(
    command: &EndSession,
    repo: &SessionRepository,
) -> Result<(), DomainError> {
    if !repo.remove(command.session_id).await? {
        return Err(DomainError::SessionNotFound(command.session_id));
    }

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        session_id = %command.session_id,
        "session ended"
    );

    Ok(())
}

/// Removes every session that has not been saved for longer than `max_idle`
/// and returns how many were removed.
///
/// # Errors
///
/// Returns an error from the repository.
pub async fn evict_idle_sessions(
    clock: &dyn Clock,
    max_idle: Duration,
    repo: &SessionRepository,
) -> Result<usize, DomainError> {
    let cutoff = clock.now() - max_idle;
    let removed = repo.remove_saved_before(cutoff).await?;

    if removed > 0 {
        info!(removed, %cutoff, "evicted idle sessions");
    }

    Ok(removed)
}
