//! Integration tests for the file-backed store: persistence across reopen, resets, corrupt files.

use std::fs;
use std::path::PathBuf;
use swiss_tournament::{
    JsonFileStore, Opponent, StorageError, Tournament, TournamentConfig, TournamentStore,
};
use tempfile::TempDir;

/// Store location inside a scratch directory that is removed when the test ends.
struct TempPath(PathBuf, TempDir);

impl TempPath {
    fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        Self(dir.path().join("tournament.json"), dir)
    }
}

#[test]
fn missing_file_opens_empty() {
    let path = TempPath::new();
    let store = JsonFileStore::open(&path.0).unwrap();
    assert_eq!(store.player_count().unwrap(), 0);
    assert!(store.matches().unwrap().is_empty());
    assert!(!path.0.exists());
}

#[test]
fn state_survives_reopen() {
    let path = TempPath::new();
    let (standings, pairings) = {
        let store = JsonFileStore::open(&path.0).unwrap();
        let t = Tournament::new(store, TournamentConfig::default());
        let a = t.register("A").unwrap();
        let b = t.register("B").unwrap();
        let c = t.register("C").unwrap();
        t.report(a, b).unwrap();
        t.ledger().report_bye(c).unwrap();
        (t.standings().unwrap(), t.next_round_pairings().unwrap())
    };

    let store = JsonFileStore::open(&path.0).unwrap();
    let t = Tournament::new(store, TournamentConfig::default());
    assert_eq!(t.standings().unwrap(), standings);
    assert_eq!(t.next_round_pairings().unwrap(), pairings);
    assert_eq!(t.ledger().records().unwrap()[1].loser, Opponent::Bye);
    assert_eq!(t.register("D").unwrap().get(), 4);
}

#[test]
fn reset_is_persisted_and_ids_keep_counting() {
    let path = TempPath::new();
    {
        let store = JsonFileStore::open(&path.0).unwrap();
        let t = Tournament::new(store, TournamentConfig::default());
        let a = t.register("A").unwrap();
        let b = t.register("B").unwrap();
        t.report(a, b).unwrap();
        t.reset_all().unwrap();
    }

    let store = JsonFileStore::open(&path.0).unwrap();
    assert_eq!(store.player_count().unwrap(), 0);
    assert!(store.matches().unwrap().is_empty());
    assert_eq!(store.insert_player("C").unwrap().id.get(), 3);
}

#[test]
fn corrupt_file_is_reported() {
    let path = TempPath::new();
    fs::write(&path.0, b"{ not json").unwrap();
    assert!(matches!(
        JsonFileStore::open(&path.0),
        Err(StorageError::Corrupt(_))
    ));
}

#[test]
fn config_opens_store_at_data_path() {
    let path = TempPath::new();
    let config = TournamentConfig {
        data_path: Some(path.0.clone()),
        ..TournamentConfig::default()
    };
    let store = config.open_store().unwrap().unwrap();
    assert_eq!(store.path(), path.0.as_path());
    store.insert_player("A").unwrap();
    assert!(path.0.exists());

    assert!(TournamentConfig::default().open_store().unwrap().is_none());
}

#[test]
fn failed_write_leaves_store_untouched() {
    let path = TempPath::new();
    let store = JsonFileStore::open(&path.0).unwrap();
    // A directory in the target's place makes every persist fail.
    fs::create_dir(&path.0).unwrap();

    assert!(matches!(store.insert_player("A"), Err(StorageError::Io(_))));
    assert_eq!(store.player_count().unwrap(), 0);
    assert!(store.snapshot().unwrap().players.is_empty());

    fs::remove_dir(&path.0).unwrap();
    assert_eq!(store.insert_player("A").unwrap().id.get(), 1);
    assert_eq!(JsonFileStore::open(&path.0).unwrap().player_count().unwrap(), 1);
}

#[test]
fn player_id_zero_on_disk_is_corrupt() {
    let path = TempPath::new();
    fs::write(
        &path.0,
        r#"{"next_id":2,"players":[{"id":0,"name":"A","registered_at":"2026-01-01T00:00:00Z"}],"matches":[]}"#,
    )
    .unwrap();
    assert!(matches!(
        JsonFileStore::open(&path.0),
        Err(StorageError::Corrupt(_))
    ));
}

#[test]
fn id_counter_behind_players_is_corrupt() {
    let path = TempPath::new();
    fs::write(
        &path.0,
        r#"{"next_id":2,"players":[{"id":5,"name":"A","registered_at":"2026-01-01T00:00:00Z"}],"matches":[]}"#,
    )
    .unwrap();
    assert!(matches!(
        JsonFileStore::open(&path.0),
        Err(StorageError::Corrupt(_))
    ));
}

#[test]
fn exhausted_id_space_is_an_error_not_a_panic() {
    let path = TempPath::new();
    fs::write(
        &path.0,
        format!(r#"{{"next_id":{},"players":[],"matches":[]}}"#, u32::MAX),
    )
    .unwrap();
    let store = JsonFileStore::open(&path.0).unwrap();
    assert_eq!(
        store.insert_player("A"),
        Err(StorageError::IdSpaceExhausted)
    );
    assert_eq!(store.player_count().unwrap(), 0);
}
