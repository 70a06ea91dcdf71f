use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{Progress, QuestionIndex, SessionResult};
use quiz_core::time::fixed_now;
use storage::repository::SnapshotRepository;
use storage::sqlite::SqliteRepository;
use storage::{PROGRESS_SNAPSHOT_KEY, ProgressStore, Storage};

fn two_sessions() -> Progress {
    let used = [4, 8, 15, 16, 2, 0, 1, 3, 9, 19]
        .into_iter()
        .map(QuestionIndex::new)
        .collect();
    Progress::from_persisted(
        used,
        7,
        10,
        2,
        vec![SessionResult::new(1, 3, 5), SessionResult::new(2, 4, 5)],
        20,
    )
    .unwrap()
}

#[tokio::test]
async fn sqlite_roundtrip_persists_progress() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_progress?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let store = ProgressStore::new(Arc::new(repo.clone())).with_clock(Clock::fixed(fixed_now()));
    store.try_save(&two_sessions()).await.expect("save");

    let restored = store.try_load(20).await.expect("load");
    assert_eq!(restored, Some(two_sessions()));

    let raw = repo
        .get_snapshot(PROGRESS_SNAPSHOT_KEY)
        .await
        .unwrap()
        .expect("raw snapshot");
    assert!(raw.contains("\"usedQuestionIndices\""));
}

#[tokio::test]
async fn sqlite_upsert_replaces_previous_snapshot() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_upsert?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.put_snapshot("k", "first").await.unwrap();
    repo.put_snapshot("k", "second").await.unwrap();
    assert_eq!(repo.get_snapshot("k").await.unwrap().as_deref(), Some("second"));

    repo.delete_snapshot("k").await.unwrap();
    assert_eq!(repo.get_snapshot("k").await.unwrap(), None);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");
}

#[tokio::test]
async fn storage_sqlite_clear_removes_progress() {
    let storage = Storage::sqlite("sqlite:file:memdb_clear?mode=memory&cache=shared")
        .await
        .expect("storage");
    let store = ProgressStore::new(storage.snapshots.clone());

    store.save(&two_sessions()).await;
    assert!(store.load(20).await.is_some());

    store.clear().await;
    assert_eq!(store.load(20).await, None);
}
