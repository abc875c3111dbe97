//! Integration tests for the save stores

use rankly::cli::{map_error, CORRUPT_SAVE_MESSAGE};
use rankly::error::{ApiError, StorageError};
use rankly::snapshot::restore;
use rankly::sort::{Algorithm, Engine, SortEngine};
use rankly::store::{JsonFileStore, SaveRecord, SaveStore, SledSessionStore};
use tempfile::TempDir;

use super::test_utils::numbered_songs;

fn pending_record(name: &str, algorithm: Algorithm) -> SaveRecord {
    let mut engine = Engine::new(algorithm, numbered_songs(4)).unwrap();
    engine.next(None).unwrap();
    SaveRecord::new(name, engine.snapshot().unwrap(), 0)
}

/// Saves survive closing and reopening the database
#[test]
fn test_sessions_survive_reopen() {
    let temp = TempDir::new().unwrap();
    let db_path = temp.path().join("sessions");
    {
        let store = SledSessionStore::new(&db_path).unwrap();
        store.save(&pending_record("binary", Algorithm::BinaryInsertion)).unwrap();
        store.save(&pending_record("merge", Algorithm::Merge)).unwrap();
    }

    let store = SledSessionStore::new(&db_path).unwrap();
    let mut names: Vec<String> = store.list().unwrap().into_iter().map(|r| r.name).collect();
    names.sort();
    assert_eq!(names, vec!["binary", "merge"]);

    let record = store.require("merge").unwrap();
    let engine = restore(record.state).unwrap();
    assert_eq!(engine.algorithm(), Algorithm::Merge);
}

/// A record that no longer decodes is reported as a corrupt save
#[test]
fn test_undecodable_record_maps_to_corrupt_save() {
    let temp = TempDir::new().unwrap();
    let db = sled::open(temp.path()).unwrap();
    db.open_tree("saves")
        .unwrap()
        .insert("broken", &b"{\"name\": \"broken\"}"[..])
        .unwrap();
    let store = SledSessionStore::from_db(db).unwrap();

    let err = store.require("broken").unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
    let err = ApiError::StorageError(err);
    assert_eq!(map_error(&err), CORRUPT_SAVE_MESSAGE);
}

#[test]
fn test_missing_session_is_not_corrupt() {
    let temp = TempDir::new().unwrap();
    let store = SledSessionStore::new(temp.path()).unwrap();
    let err = ApiError::from(store.require("nope").unwrap_err());
    assert_eq!(map_error(&err), "Error: Storage error: Save not found: nope");
}

/// Saving twice to one file replaces the earlier snapshot
#[test]
fn test_file_save_overwrites() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp.path().join("rank.json"));
    store.save(&pending_record("rank", Algorithm::BinaryInsertion)).unwrap();
    store.save(&pending_record("rank", Algorithm::Merge)).unwrap();

    assert_eq!(store.load().unwrap().algorithm(), Algorithm::Merge);
    assert!(!temp.path().join("rank.json.tmp").exists());
}

#[test]
fn test_session_store_location_names_session() {
    let temp = TempDir::new().unwrap();
    let store = SledSessionStore::new(temp.path()).unwrap();
    let location = store.save(&pending_record("mix", Algorithm::Merge)).unwrap();
    assert_eq!(location, "session 'mix'");
}
