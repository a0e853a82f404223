//! Unit tests for the catalog-store crate.

use catalog_core::{
    Character, CharacterAttributes, Entity, ExternalId, Film, LocalId, PageQuery, Planet,
};
use tempfile::TempDir;

use crate::{CatalogSnapshot, MemoryStore, Repository, SnapshotFile, StoreError};

fn id(value: u32) -> ExternalId {
    ExternalId::new(value).unwrap()
}

fn character(external_id: u32, name: &str) -> Character {
    let mut character = Character::new(id(external_id));
    character.set_attributes(CharacterAttributes {
        name: name.to_string(),
        ..Default::default()
    });
    character
}

async fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    for (external_id, name) in [
        (1, "Luke Skywalker"),
        (2, "C-3PO"),
        (4, "Darth Vader"),
        (11, "Anakin Skywalker"),
        (5, "Leia Organa"),
    ] {
        store.save(character(external_id, name)).await.unwrap();
    }
    store
}

// ============================================================================
// Save / Find Tests
// ============================================================================

#[tokio::test]
async fn test_save_assigns_sequential_local_ids() {
    let store = MemoryStore::new();

    let luke = store.save(character(1, "Luke Skywalker")).await.unwrap();
    let vader = store.save(character(4, "Darth Vader")).await.unwrap();

    assert_eq!(luke.local_id, Some(LocalId::new(1)));
    assert_eq!(vader.local_id, Some(LocalId::new(2)));
    assert_eq!(Repository::<Character>::count(&store).await.unwrap(), 2);
}

#[tokio::test]
async fn test_local_ids_are_per_kind() {
    let store = MemoryStore::new();

    let luke = store.save(character(1, "Luke Skywalker")).await.unwrap();
    let tatooine = store.save(Planet::new(id(1))).await.unwrap();

    assert_eq!(luke.local_id, Some(LocalId::new(1)));
    assert_eq!(tatooine.local_id, Some(LocalId::new(1)));
}

#[tokio::test]
async fn test_update_keeps_local_id() {
    let store = MemoryStore::new();
    let mut luke = store.save(character(1, "Luke")).await.unwrap();

    luke.attributes.name = "Luke Skywalker".to_string();
    let updated = store.save(luke).await.unwrap();

    assert_eq!(updated.local_id, Some(LocalId::new(1)));
    let found: Character = store.find_by_external_id(id(1)).await.unwrap().unwrap();
    assert_eq!(found.attributes.name, "Luke Skywalker");
    assert_eq!(Repository::<Character>::count(&store).await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_with_taken_external_id_is_rejected() {
    let store = MemoryStore::new();
    store.save(character(1, "Luke Skywalker")).await.unwrap();

    let err = store.save(character(1, "Impostor")).await.unwrap_err();

    assert!(matches!(
        err,
        StoreError::DuplicateExternalId { existing, .. } if existing == LocalId::new(1)
    ));
    assert!(!err.is_fatal());
    assert_eq!(Repository::<Character>::count(&store).await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_of_unknown_local_id_is_rejected() {
    let store = MemoryStore::new();
    let mut ghost = character(9, "Ghost");
    ghost.set_local_id(LocalId::new(7));

    let err = store.save(ghost).await.unwrap_err();

    assert!(matches!(err, StoreError::UnknownLocalId { .. }));
}

#[tokio::test]
async fn test_update_cannot_change_external_id() {
    let store = MemoryStore::new();
    store.save(character(1, "Luke Skywalker")).await.unwrap();
    let mut renumbered = character(9, "Luke Skywalker");
    renumbered.set_local_id(LocalId::new(1));

    let err = store.save(renumbered).await.unwrap_err();

    assert!(matches!(err, StoreError::Rejected { external_id, .. } if external_id == id(9)));
    assert!(!err.is_fatal());
    let luke: Character = store.find_by_external_id(id(1)).await.unwrap().unwrap();
    assert_eq!(luke.local_id, Some(LocalId::new(1)));
    let missing: Option<Character> = store.find_by_external_id(id(9)).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_find_missing_external_id_returns_none() {
    let store = seeded_store().await;
    let found: Option<Film> = store.find_by_external_id(id(1)).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_all_by_ids_keeps_order_and_skips_unknown() {
    let store = seeded_store().await;

    let found: Vec<Character> = store
        .find_all_by_ids(&[LocalId::new(3), LocalId::new(99), LocalId::new(1)])
        .await
        .unwrap();

    let names: Vec<&str> = found.iter().map(|c| c.display_name()).collect();
    assert_eq!(names, vec!["Darth Vader", "Luke Skywalker"]);
}

// ============================================================================
// Paging Tests
// ============================================================================

#[tokio::test]
async fn test_find_page_filters_by_name() {
    let store = seeded_store().await;

    let page = Repository::<Character>::find_page(
        &store,
        &PageQuery::new(0, 15, Some("skywalker".to_string())),
    )
    .await
    .unwrap();

    let names: Vec<&str> = page.content.iter().map(|c| c.display_name()).collect();
    assert_eq!(names, vec!["Luke Skywalker", "Anakin Skywalker"]);
    assert_eq!(page.total_elements, 2);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn test_find_page_orders_by_local_id() {
    let store = seeded_store().await;

    let page = Repository::<Character>::find_page(&store, &PageQuery::new(1, 2, None))
        .await
        .unwrap();

    let names: Vec<&str> = page.content.iter().map(|c| c.display_name()).collect();
    assert_eq!(names, vec!["Darth Vader", "Anakin Skywalker"]);
    assert_eq!(page.total_elements, 5);
    assert_eq!(page.total_pages, 3);
}

// ============================================================================
// Snapshot Tests
// ============================================================================

#[tokio::test]
async fn test_snapshot_file_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let file = SnapshotFile::new(temp_dir.path().join("nested").join("catalog.json"));

    let store = seeded_store().await;
    let mut luke: Character = store.find_by_external_id(id(1)).await.unwrap().unwrap();
    luke.films.insert(id(1));
    luke.homeworld = Some(id(1));
    store.save(luke).await.unwrap();

    let snapshot = store.snapshot().await;
    file.save(&snapshot).unwrap();

    let loaded = file.load().unwrap().unwrap();
    assert_eq!(loaded, snapshot);

    let restored = MemoryStore::from_snapshot(loaded).unwrap();
    let luke: Character = restored.find_by_external_id(id(1)).await.unwrap().unwrap();
    assert_eq!(luke.local_id, Some(LocalId::new(1)));
    assert_eq!(luke.homeworld, Some(id(1)));
    assert!(luke.films.contains(&id(1)));

    // New records continue after the restored ids.
    let yoda = restored.save(character(20, "Yoda")).await.unwrap();
    assert_eq!(yoda.local_id, Some(LocalId::new(6)));
}

#[test]
fn test_load_missing_snapshot_returns_none() {
    let temp_dir = TempDir::new().unwrap();
    let file = SnapshotFile::new(temp_dir.path().join("absent.json"));
    assert!(file.load().unwrap().is_none());
}

#[test]
fn test_load_garbage_snapshot_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = SnapshotFile::new(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::Json(_)));
}

#[test]
fn test_snapshot_with_gap_in_local_ids_is_rejected() {
    let mut luke = character(1, "Luke Skywalker");
    luke.set_local_id(LocalId::new(2));
    let snapshot = CatalogSnapshot {
        characters: vec![luke],
        ..CatalogSnapshot::default()
    };

    let err = MemoryStore::from_snapshot(snapshot).unwrap_err();
    assert!(matches!(err, StoreError::CorruptSnapshot(_)));
    assert!(err.is_fatal());
}

#[test]
fn test_snapshot_with_unknown_version_is_rejected() {
    let snapshot = CatalogSnapshot {
        version: 99,
        ..CatalogSnapshot::default()
    };
    assert!(matches!(
        MemoryStore::from_snapshot(snapshot),
        Err(StoreError::CorruptSnapshot(_))
    ));
}

#[test]
fn test_error_fatality() {
    assert!(StoreError::Unavailable("down".to_string()).is_fatal());
    assert!(StoreError::Io(std::io::Error::other("disk")).is_fatal());
    assert!(!StoreError::UnknownLocalId {
        kind: catalog_core::EntityKind::Film,
        local_id: LocalId::new(1),
    }
    .is_fatal());
}
