//! Snapshot repository abstraction.
//!
//! Sessions are stored whole, as versioned snapshots. Saving compares the
//! caller's expected version against the stored one so that two concurrent
//! draws on the same session cannot silently overwrite each other.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

/// Stored representation of an aggregate's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSnapshot<T> {
    /// Aggregate this snapshot belongs to.
    pub aggregate_id: Uuid,
    /// Number of successful saves, starting at 1.
    pub version: i64,
    /// When the snapshot was written.
    pub saved_at: DateTime<Utc>,
    /// The aggregate state.
    pub state: T,
}

/// Repository trait for loading and saving versioned snapshots.
#[async_trait]
pub trait SnapshotRepository<T>: Send + Sync
where
    T: Clone + Send + Sync + 'static,
{
    /// Load the latest snapshot for an aggregate, if any.
    async fn load(&self, aggregate_id: Uuid) -> Result<Option<StoredSnapshot<T>>, DomainError>;

    /// Store a new snapshot. `expected_version` is the version the caller
    /// loaded (0 for a new aggregate); `snapshot.version` must be one more.
    async fn save(
        &self,
        expected_version: i64,
        snapshot: StoredSnapshot<T>,
    ) -> Result<(), DomainError>;

    /// Delete an aggregate's snapshot. Returns `false` if there was none.
    async fn remove(&self, aggregate_id: Uuid) -> Result<bool, DomainError>;

    /// Delete every snapshot last saved before `cutoff` and return how many
    /// were removed.
    async fn remove_saved_before(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError>;
}
