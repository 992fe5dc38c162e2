//! In-memory implementation of the `SnapshotRepository` trait.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use lucky_core::error::DomainError;
use lucky_core::repository::{SnapshotRepository, StoredSnapshot};

/// Process-local snapshot store keyed by aggregate ID.
#[derive(Debug)]
pub struct InMemorySnapshotRepository<T> {
    snapshots: RwLock<HashMap<Uuid, StoredSnapshot<T>>>,
}

impl<T> InMemorySnapshotRepository<T> {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Default for InMemorySnapshotRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<E: std::fmt::Display>(err: E) -> DomainError {
    DomainError::Infrastructure(format!("session store lock poisoned: {err}"))
}

#[async_trait]
impl<T> SnapshotRepository<T> for InMemorySnapshotRepository<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn load(&self, aggregate_id: Uuid) -> Result<Option<StoredSnapshot<T>>, DomainError> {
        let snapshots = self.snapshots.read().map_err(poisoned)?;
        Ok(snapshots.get(&aggregate_id).cloned())
    }

    async fn save(
        &self,
        expected_version: i64,
        snapshot: StoredSnapshot<T>,
    ) -> Result<(), DomainError> {
        let mut snapshots = self.snapshots.write().map_err(poisoned)?;
        let actual = snapshots
            .get(&snapshot.aggregate_id)
            .map_or(0, |stored| stored.version);

        if actual != expected_version || snapshot.version != expected_version + 1 {
            warn!(
                aggregate_id = %snapshot.aggregate_id,
                expected_version,
                actual,
                "rejected stale snapshot"
            );
            return Err(DomainError::ConcurrencyConflict {
                session_id: snapshot.aggregate_id,
                expected: expected_version,
                actual,
            });
        }

        snapshots.insert(snapshot.aggregate_id, snapshot);
        Ok(())
    }

    async fn remove(&self, aggregate_id: Uuid) -> Result<bool, DomainError> {
        let mut snapshots = self.snapshots.write().map_err(poisoned)?;
        Ok(snapshots.remove(&aggregate_id).is_some())
    }

    async fn remove_saved_before(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut snapshots = self.snapshots.write().map_err(poisoned)?;
        let before = snapshots.len();
        snapshots.retain(|_, stored| stored.saved_at >= cutoff);
        let removed = before - snapshots.len();

        debug!(removed, remaining = snapshots.len(), %cutoff, "evicted idle snapshots");
        Ok(removed)
    }
}
