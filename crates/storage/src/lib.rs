#![forbid(unsafe_code)]

pub mod progress_store;
pub mod repository;
pub mod snapshot;
pub mod sqlite;

pub use progress_store::{ProgressStore, ProgressStoreError};
pub use repository::{InMemoryRepository, SnapshotRepository, Storage, StorageError};
pub use snapshot::{PROGRESS_SNAPSHOT_KEY, ProgressRecord, SnapshotError};
