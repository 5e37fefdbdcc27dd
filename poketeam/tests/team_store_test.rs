use std::sync::Arc;

use poketeam::{
    config::StorageOptions,
    store::{
        BlobStore,
        FileBlobStore,
        MemoryBlobStore,
        SaveOutcome,
        TeamStore,
    },
    teams::Team,
};
use poketeam_test_utils::{
    FailingBlobStore,
    ReadFailingBlobStore,
    sample_team,
    setup_test_environment,
};
use pretty_assertions::assert_eq;
use tempdir::TempDir;

fn memory_store() -> (Arc<MemoryBlobStore>, TeamStore) {
    let blobs = Arc::new(MemoryBlobStore::new());
    let store = TeamStore::new(blobs.clone(), &StorageOptions::default());
    (blobs, store)
}

#[test]
fn saves_first_team_into_empty_store() {
    setup_test_environment();
    let (blobs, store) = memory_store();
    let team = sample_team();
    assert_eq!(
        store.save_team(&team),
        SaveOutcome {
            success: true,
            needs_confirmation: false,
            existing_team_name: None,
        }
    );
    assert_eq!(store.list_teams(), vec![team.clone()]);
    assert_eq!(store.get_team(&team.id), Some(team));

    let raw = blobs.get("pokemon-teams").unwrap().unwrap();
    assert!(raw.starts_with('['));
}

#[test]
fn updates_same_team_in_place() {
    setup_test_environment();
    let (_, store) = memory_store();
    let mut team = sample_team();
    assert!(store.save_team(&team).success);

    team.set_name("改名");
    team.pokemon.pop();
    team.touch();
    assert!(store.save_team(&team).success);
    assert_eq!(store.list_teams(), vec![team]);
}

#[test]
fn asks_before_replacing_a_different_team() {
    setup_test_environment();
    let (_, store) = memory_store();
    let first = sample_team();
    assert!(store.save_team(&first).success);

    let second = Team::new("新しいパーティ");
    assert_eq!(
        store.save_team(&second),
        SaveOutcome {
            success: false,
            needs_confirmation: true,
            existing_team_name: Some("ドラゴン統一 🐉".to_owned()),
        }
    );
    assert_eq!(store.list_teams(), vec![first]);

    assert!(store.overwrite_team(&second));
    assert_eq!(store.list_teams(), vec![second]);
}

#[test]
fn deletes_idempotently() {
    setup_test_environment();
    let (_, store) = memory_store();
    let team = sample_team();
    store.save_team(&team);

    store.delete_team("team-unknown");
    assert_eq!(store.list_teams().len(), 1);

    store.delete_team(&team.id);
    assert_eq!(store.list_teams(), Vec::new());
    store.delete_team(&team.id);
    assert_eq!(store.list_teams(), Vec::new());
    assert_eq!(store.get_team(&team.id), None);
}

#[test]
fn failing_storage_never_fails_outward() {
    setup_test_environment();
    let store = TeamStore::new(Arc::new(FailingBlobStore), &StorageOptions::default());
    let team = sample_team();
    assert_eq!(store.list_teams(), Vec::new());
    assert_eq!(store.get_team(&team.id), None);
    assert_eq!(store.save_team(&team), SaveOutcome::default());
    assert!(!store.overwrite_team(&team));
    store.delete_team(&team.id);
}

#[test]
fn unreadable_storage_keeps_saved_team() {
    setup_test_environment();
    let blobs = Arc::new(ReadFailingBlobStore::new());
    let store = TeamStore::new(blobs.clone(), &StorageOptions::default());
    let saved = sample_team();
    assert!(store.save_team(&saved).success);

    blobs.set_readable(false);
    assert_eq!(store.save_team(&Team::new("新しいパーティ")), SaveOutcome::default());
    store.delete_team(&saved.id);

    blobs.set_readable(true);
    assert_eq!(store.list_teams(), vec![saved]);
}

#[test]
fn replaces_corrupt_blob_on_save() {
    setup_test_environment();
    let (blobs, store) = memory_store();
    blobs.set("pokemon-teams", "{not json").unwrap();
    assert_eq!(store.list_teams(), Vec::new());

    let team = sample_team();
    assert!(store.save_team(&team).success);
    assert_eq!(store.list_teams(), vec![team]);
}

#[test]
fn persists_across_file_backed_sessions() {
    setup_test_environment();
    let dir = TempDir::new("poketeam").unwrap();
    let team = sample_team();
    {
        let blobs = Arc::new(FileBlobStore::new(dir.path()).unwrap());
        let store = TeamStore::new(blobs, &StorageOptions::default());
        assert!(store.save_team(&team).success);
    }
    let blobs = Arc::new(FileBlobStore::new(dir.path()).unwrap());
    let store = TeamStore::new(blobs, &StorageOptions::default());
    assert_eq!(store.list_teams(), vec![team]);
    assert!(dir.path().join("pokemon-teams.json").is_file());
}
