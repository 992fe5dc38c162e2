//! Test repositories — stub `SnapshotRepository` implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lucky_core::error::DomainError;
use lucky_core::repository::{SnapshotRepository, StoredSnapshot};
use uuid::Uuid;

/// A repository that never finds anything and silently accepts saves.
/// Useful for "session not found" scenarios and creation commands.
#[derive(Debug)]
pub struct EmptySnapshotRepository;

#[async_trait]
impl<T> SnapshotRepository<T> for EmptySnapshotRepository
where
    T: Clone + Send + Sync + 'static,
{
    async fn load(&self, _aggregate_id: Uuid) -> Result<Option<StoredSnapshot<T>>, DomainError> {
        Ok(None)
    }

    async fn save(
        &self,
        _expected_version: i64,
        _snapshot: StoredSnapshot<T>,
    ) -> Result<(), DomainError> {
        Ok(())
    }

    async fn remove(&self, _aggregate_id: Uuid) -> Result<bool, DomainError> {
        Ok(false)
    }

    async fn remove_saved_before(&self, _cutoff: DateTime<Utc>) -> Result<usize, DomainError> {
        Ok(0)
    }
}

/// A repository that fails every call with an infrastructure error.
#[derive(Debug)]
pub struct FailingSnapshotRepository;

#[async_trait]
impl<T> SnapshotRepository<T> for FailingSnapshotRepository
where
    T: Clone + Send + Sync + 'static,
{
    async fn load(&self, _aggregate_id: Uuid) -> Result<Option<StoredSnapshot<T>>, DomainError> {
        Err(DomainError::Infrastructure("session store unavailable".into()))
    }

    async fn save(
        &self,
        _expected_version: i64,
        _snapshot: StoredSnapshot<T>,
    ) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("session store unavailable".into()))
    }

    async fn remove(&self, _aggregate_id: Uuid) -> Result<bool, DomainError> {
        Err(DomainError::Infrastructure("session store unavailable".into()))
    }

    async fn remove_saved_before(&self, _cutoff: DateTime<Utc>) -> Result<usize, DomainError> {
        Err(DomainError::Infrastructure("session store unavailable".into()))
    }
}
