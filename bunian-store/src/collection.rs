//! Ordered record collections and single-record documents over the store.
//!
//! A collection owns its in-memory list and writes the whole list back after
//! every mutation, the same cadence the admin panel has always persisted at.
//! Misses on modify/remove are explicit [`StoreError::NotFound`] results;
//! the collection is left untouched so a failed update cannot half-apply.

use bunian_types::{now_millis, Record, RecordId};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{StoreError, StoreResult};
use crate::store::RecordStore;

/// An ordered, id-keyed list of records persisted under one storage key.
#[derive(Debug)]
pub struct Collection<T> {
    key: &'static str,
    records: Vec<T>,
}

impl<T> Collection<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    /// Loads the collection from the store, seeding it with `seed` when the
    /// key is absent or its blob cannot be decoded.
    pub fn load(store: &RecordStore, key: &'static str, seed: impl FnOnce() -> Vec<T>) -> Self {
        let records = store.load_or(key, seed);
        Self { key, records }
    }

    /// The storage key this collection persists under.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Returns a fresh id for the next insert: the current wall clock in
    /// milliseconds, bumped forward while it collides with an id already in
    /// the collection. Two inserts within the same millisecond therefore
    /// still get distinct ids.
    #[must_use]
    pub fn next_id(&self) -> RecordId {
        let mut millis = now_millis();
        loop {
            let id = RecordId::from_millis(millis);
            if !self.contains(&id) {
                return id;
            }
            millis += 1;
        }
    }

    /// Appends a record at the end and persists the collection.
    pub fn insert(&mut self, store: &RecordStore, record: T) -> StoreResult<()> {
        self.records.push(record);
        self.persist(store)
    }

    /// Applies `apply` to the record with the given id and persists the
    /// collection. Returns [`StoreError::NotFound`] (with the collection
    /// untouched) when no record matches.
    pub fn modify(
        &mut self,
        store: &RecordStore,
        id: &RecordId,
        apply: impl FnOnce(&mut T),
    ) -> StoreResult<()> {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            return Err(StoreError::NotFound(id.to_string()));
        };
        apply(record);
        self.persist(store)
    }

    /// Removes the record with the given id and persists the collection.
    /// Returns [`StoreError::NotFound`] when no record matches.
    pub fn remove(&mut self, store: &RecordStore, id: &RecordId) -> StoreResult<()> {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        if self.records.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.persist(store)
    }

    fn persist(&self, store: &RecordStore) -> StoreResult<()> {
        store.save(self.key, &self.records)
    }
}

/// A single persisted record, for state that is one value rather than a list.
#[derive(Debug)]
pub struct Document<T> {
    key: &'static str,
    value: T,
}

impl<T> Document<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Loads the document, seeding it with `seed` when the key is absent or
    /// its blob cannot be decoded.
    pub fn load(store: &RecordStore, key: &'static str, seed: impl FnOnce() -> T) -> Self {
        let value = store.load_or(key, seed);
        Self { key, value }
    }

    /// The current value.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Applies `apply` to the value and persists it.
    pub fn update(&mut self, store: &RecordStore, apply: impl FnOnce(&mut T)) -> StoreResult<()> {
        apply(&mut self.value);
        store.save(self.key, &self.value)
    }

    /// Replaces the value and persists it.
    pub fn set(&mut self, store: &RecordStore, value: T) -> StoreResult<()> {
        self.value = value;
        store.save(self.key, &self.value)
    }
}
