use bunian_fixtures::{market_trend, projects};
use bunian_model::{MarketTrend, Project, ProjectStatus};
use bunian_store::{keys, Collection, Document, RecordStore, StoreError};
use bunian_types::RecordId;
use pretty_assertions::assert_eq;

fn make_addition() -> Project {
    let mut p = projects().remove(0);
    p.title = "Test Villa".to_string();
    p
}

// ── Loading & seeding ────────────────────────────────────────────

#[test]
fn loads_seed_when_store_is_empty() {
    let store = RecordStore::open_in_memory();
    let col = Collection::load(&store, keys::ADMIN_PROJECTS, projects);
    assert_eq!(col.len(), 6);
    assert_eq!(col.key(), "adminProjects");
}

#[test]
fn loads_stored_state_over_seed() {
    let store = RecordStore::open_in_memory();
    let mut edited = projects();
    edited.truncate(2);
    store.save(keys::ADMIN_PROJECTS, &edited).unwrap();

    let col = Collection::load(&store, keys::ADMIN_PROJECTS, projects);
    assert_eq!(col.len(), 2);
}

// ── Insert ───────────────────────────────────────────────────────

#[test]
fn insert_appends_at_end_and_persists() {
    let store = RecordStore::open_in_memory();
    let mut col = Collection::load(&store, keys::ADMIN_PROJECTS, projects);

    let mut added = make_addition();
    added.id = col.next_id();
    let id = added.id.clone();
    col.insert(&store, added).unwrap();

    assert_eq!(col.len(), 7);
    assert_eq!(col.records().last().unwrap().id, id);

    // A second load sees the persisted state, not the seed
    let reloaded = Collection::<Project>::load(&store, keys::ADMIN_PROJECTS, projects);
    assert_eq!(reloaded.len(), 7);
    assert!(reloaded.contains(&id));
}

#[test]
fn next_id_is_fresh_and_nonempty() {
    let store = RecordStore::open_in_memory();
    let col = Collection::<Project>::load(&store, keys::ADMIN_PROJECTS, projects);

    let id = col.next_id();
    assert!(!id.as_str().is_empty());
    assert!(!col.contains(&id));
}

#[test]
fn rapid_inserts_get_distinct_ids() {
    let store = RecordStore::open_in_memory();
    let mut col = Collection::load(&store, keys::ADMIN_PROJECTS, projects);

    let mut seen = Vec::new();
    for _ in 0..5 {
        let mut p = make_addition();
        p.id = col.next_id();
        seen.push(p.id.clone());
        col.insert(&store, p).unwrap();
    }

    let mut deduped = seen.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), seen.len());
}

// ── Modify ───────────────────────────────────────────────────────

#[test]
fn modify_changes_only_the_matching_record() {
    let store = RecordStore::open_in_memory();
    let mut col = Collection::load(&store, keys::ADMIN_PROJECTS, projects);

    let id = RecordId::parse("2").unwrap();
    col.modify(&store, &id, |p| p.status = ProjectStatus::Sold)
        .unwrap();

    assert_eq!(col.get(&id).unwrap().status, ProjectStatus::Sold);
    let untouched = col.get(&RecordId::parse("1").unwrap()).unwrap();
    assert_eq!(untouched.status, projects()[0].status);
}

#[test]
fn modify_of_missing_id_is_not_found() {
    let store = RecordStore::open_in_memory();
    let mut col = Collection::load(&store, keys::ADMIN_PROJECTS, projects);

    let ghost = RecordId::parse("no-such-id").unwrap();
    let err = col
        .modify(&store, &ghost, |p| p.featured = true)
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    // Contents and length are unchanged
    assert_eq!(col.records(), projects().as_slice());
}

// ── Remove ───────────────────────────────────────────────────────

#[test]
fn remove_deletes_and_persists() {
    let store = RecordStore::open_in_memory();
    let mut col = Collection::load(&store, keys::ADMIN_PROJECTS, projects);

    let id = RecordId::parse("4").unwrap();
    col.remove(&store, &id).unwrap();

    assert_eq!(col.len(), 5);
    assert!(!col.contains(&id));
    let reloaded = Collection::<Project>::load(&store, keys::ADMIN_PROJECTS, projects);
    assert_eq!(reloaded.len(), 5);
}

#[test]
fn remove_of_missing_id_is_not_found() {
    let store = RecordStore::open_in_memory();
    let mut col = Collection::load(&store, keys::ADMIN_PROJECTS, projects);

    let ghost = RecordId::parse("404").unwrap();
    let err = col.remove(&store, &ghost).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
    assert_eq!(col.len(), 6);
}

#[test]
fn add_update_delete_restores_original_state() {
    let store = RecordStore::open_in_memory();
    let mut col = Collection::load(&store, keys::ADMIN_PROJECTS, projects);
    let original: Vec<Project> = col.records().to_vec();

    let mut p = make_addition();
    p.id = col.next_id();
    let id = p.id.clone();
    col.insert(&store, p).unwrap();
    col.modify(&store, &id, |p| p.title = "Renamed".to_string())
        .unwrap();
    col.remove(&store, &id).unwrap();

    assert_eq!(col.records(), original.as_slice());
}

// ── Documents ────────────────────────────────────────────────────

#[test]
fn document_seeds_and_updates() {
    let store = RecordStore::open_in_memory();
    let mut doc = Document::load(&store, keys::ADMIN_TRENDS, market_trend);
    assert_eq!(doc.get().market_mood_value, 72);

    doc.update(&store, |t| t.market_mood_value = 55).unwrap();
    assert_eq!(doc.get().market_mood_value, 55);

    let reloaded = Document::<MarketTrend>::load(&store, keys::ADMIN_TRENDS, market_trend);
    assert_eq!(reloaded.get().market_mood_value, 55);
}

#[test]
fn document_set_replaces_value() {
    let store = RecordStore::open_in_memory();
    let mut doc = Document::load(&store, keys::SIDEBAR_COLLAPSED, || false);
    doc.set(&store, true).unwrap();

    let reloaded = Document::<bool>::load(&store, keys::SIDEBAR_COLLAPSED, || false);
    assert!(*reloaded.get());
}
