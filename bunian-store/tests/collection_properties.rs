//! Property-based tests for the collection engine.
//!
//! These verify the contracts the admin panel leans on:
//! - a miss on modify/remove never changes the collection
//! - freshly assigned ids never collide, however fast inserts arrive
//! - the persisted blob always matches the in-memory list

use bunian_store::{Collection, RecordStore};
use bunian_types::{Record, RecordId};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Widget {
    id: RecordId,
    label: String,
}

impl Record for Widget {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

const KEY: &str = "widgets";

fn label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{0,40}").unwrap()
}

fn seeded(store: &RecordStore, labels: &[String]) -> Collection<Widget> {
    let mut col = Collection::load(store, KEY, Vec::new);
    for label in labels {
        let widget = Widget {
            id: col.next_id(),
            label: label.clone(),
        };
        col.insert(store, widget).unwrap();
    }
    col
}

proptest! {
    /// Inserting a record and removing it again restores the prior contents.
    #[test]
    fn insert_then_remove_is_identity(
        labels in prop::collection::vec(label_strategy(), 0..8),
        extra in label_strategy(),
    ) {
        let store = RecordStore::open_in_memory();
        let mut col = seeded(&store, &labels);
        let before: Vec<Widget> = col.records().to_vec();

        let id = col.next_id();
        col.insert(&store, Widget { id: id.clone(), label: extra }).unwrap();
        col.remove(&store, &id).unwrap();

        prop_assert_eq!(col.records(), before.as_slice());
    }

    /// A modify against an id that is not present never changes anything.
    #[test]
    fn modify_miss_changes_nothing(
        labels in prop::collection::vec(label_strategy(), 0..8),
    ) {
        let store = RecordStore::open_in_memory();
        let mut col = seeded(&store, &labels);
        let before: Vec<Widget> = col.records().to_vec();

        let ghost = RecordId::parse("ghost").unwrap();
        let result = col.modify(&store, &ghost, |w| w.label.push('!'));

        prop_assert!(result.is_err());
        prop_assert_eq!(col.records(), before.as_slice());
    }

    /// Assigned ids stay unique no matter how many inserts happen back to back.
    #[test]
    fn assigned_ids_are_unique(
        labels in prop::collection::vec(label_strategy(), 1..20),
    ) {
        let store = RecordStore::open_in_memory();
        let col = seeded(&store, &labels);

        let ids: HashSet<&str> = col.records().iter().map(|w| w.id.as_str()).collect();
        prop_assert_eq!(ids.len(), col.len());
    }

    /// After any sequence of inserts and removes, a reload sees exactly the
    /// in-memory state.
    #[test]
    fn persisted_state_tracks_memory(
        labels in prop::collection::vec(label_strategy(), 1..10),
        remove_index in any::<prop::sample::Index>(),
    ) {
        let store = RecordStore::open_in_memory();
        let mut col = seeded(&store, &labels);

        let victim = col.records()[remove_index.index(col.len())].id.clone();
        col.remove(&store, &victim).unwrap();

        let reloaded = Collection::<Widget>::load(&store, KEY, Vec::new);
        prop_assert_eq!(reloaded.records(), col.records());
    }
}
