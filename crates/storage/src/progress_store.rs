use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use quiz_core::Clock;
use quiz_core::model::Progress;

use crate::repository::{SnapshotRepository, StorageError};
use crate::snapshot::{PROGRESS_SNAPSHOT_KEY, ProgressRecord, SnapshotError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("corrupt snapshot: {0}")]
    Corrupt(#[from] SnapshotError),
}

/// Best-effort persistence of lifetime progress.
///
/// `save`, `load` and `clear` never fail: storage problems are logged and the
/// caller carries on in memory. The `try_*` variants surface the error.
#[derive(Clone)]
pub struct ProgressStore {
    repo: Arc<dyn SnapshotRepository>,
    key: String,
    clock: Clock,
}

impl ProgressStore {
    #[must_use]
    pub fn new(repo: Arc<dyn SnapshotRepository>) -> Self {
        Self {
            repo,
            key: PROGRESS_SNAPSHOT_KEY.to_owned(),
            clock: Clock::default(),
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persist `progress`, ignoring failures.
    pub async fn save(&self, progress: &Progress) {
        if let Err(err) = self.try_save(progress).await {
            warn!(key = %self.key, error = %err, "progress not saved; continuing in memory");
        }
    }

    /// Restore progress for a bank of `question_count` questions.
    ///
    /// Returns `None` when nothing is stored, when storage is unavailable, or
    /// when the snapshot is corrupt.
    pub async fn load(&self, question_count: usize) -> Option<Progress> {
        match self.try_load(question_count).await {
            Ok(Some(progress)) => Some(progress),
            Ok(None) => {
                debug!(key = %self.key, "no saved progress");
                None
            }
            Err(ProgressStoreError::Corrupt(err)) => {
                warn!(key = %self.key, error = %err, "discarding corrupt progress snapshot");
                None
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "could not read saved progress");
                None
            }
        }
    }

    /// Delete the stored snapshot, ignoring failures.
    pub async fn clear(&self) {
        if let Err(err) = self.try_clear().await {
            warn!(key = %self.key, error = %err, "saved progress not cleared");
        }
    }

    /// # Errors
    ///
    /// Returns `ProgressStoreError` if encoding or the write fails.
    pub async fn try_save(&self, progress: &Progress) -> Result<(), ProgressStoreError> {
        let raw = ProgressRecord::from_progress(progress, Some(self.clock.now())).encode()?;
        self.repo.put_snapshot(&self.key, &raw).await?;
        debug!(
            key = %self.key,
            sessions = progress.sessions_played(),
            used = progress.used().len(),
            "progress saved"
        );
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ProgressStoreError::Storage` if the read fails and
    /// `ProgressStoreError::Corrupt` if the snapshot does not validate.
    pub async fn try_load(
        &self,
        question_count: usize,
    ) -> Result<Option<Progress>, ProgressStoreError> {
        let Some(raw) = self.repo.get_snapshot(&self.key).await? else {
            return Ok(None);
        };
        let progress = ProgressRecord::decode(&raw)?.into_progress(question_count)?;
        Ok(Some(progress))
    }

    /// # Errors
    ///
    /// Returns `ProgressStoreError::Storage` if the delete fails.
    pub async fn try_clear(&self) -> Result<(), ProgressStoreError> {
        self.repo.delete_snapshot(&self.key).await?;
        Ok(())
    }
}
