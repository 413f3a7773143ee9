//! Whole-blob JSON persistence, one named key per value.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

use crate::error::StoreResult;

/// Durable key/value store for the admin panel's state.
///
/// Each key maps to exactly one JSON blob. The directory backend writes
/// `<key>.json` files under a data directory; the in-memory backend backs
/// tests. Writes are synchronous and unbatched: every mutation in the panel
/// results in one `save` here.
#[derive(Debug)]
pub struct RecordStore {
    backend: Backend,
}

#[derive(Debug)]
enum Backend {
    Dir(PathBuf),
    Memory(Mutex<HashMap<String, String>>),
}

impl RecordStore {
    /// Opens (or creates) a store rooted at the given data directory.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            backend: Backend::Dir(dir),
        })
    }

    /// Opens an in-memory store (for testing).
    #[must_use]
    pub fn open_in_memory() -> Self {
        Self {
            backend: Backend::Memory(Mutex::new(HashMap::new())),
        }
    }

    /// Reads and decodes the blob under `key`. Absent keys are `Ok(None)`;
    /// an unreadable or undecodable blob is an error.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.read_raw(key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Reads the blob under `key`, falling back to `default` when the key is
    /// absent or its blob cannot be read or decoded. The fallback path logs
    /// a warning but never fails: a corrupt collection blob must not take
    /// the whole panel down with it.
    pub fn load_or<T: DeserializeOwned>(&self, key: &str, default: impl FnOnce() -> T) -> T {
        match self.load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default(),
            Err(err) => {
                warn!(key, %err, "discarding unreadable blob, reseeding from defaults");
                default()
            }
        }
    }

    /// Encodes `value` and writes it under `key`, replacing any prior blob.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string(value)?;
        self.write_raw(key, json)
    }

    /// Deletes the blob under `key`. Deleting an absent key is not an error.
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        match &self.backend {
            Backend::Dir(dir) => match fs::remove_file(Self::blob_path(dir, key)) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(err) => Err(err.into()),
            },
            Backend::Memory(map) => {
                map.lock().unwrap().remove(key);
                Ok(())
            }
        }
    }

    fn read_raw(&self, key: &str) -> StoreResult<Option<String>> {
        match &self.backend {
            Backend::Dir(dir) => match fs::read_to_string(Self::blob_path(dir, key)) {
                Ok(json) => Ok(Some(json)),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            },
            Backend::Memory(map) => Ok(map.lock().unwrap().get(key).cloned()),
        }
    }

    fn write_raw(&self, key: &str, json: String) -> StoreResult<()> {
        match &self.backend {
            Backend::Dir(dir) => {
                fs::write(Self::blob_path(dir, key), json)?;
                Ok(())
            }
            Backend::Memory(map) => {
                map.lock().unwrap().insert(key.to_string(), json);
                Ok(())
            }
        }
    }

    fn blob_path(dir: &Path, key: &str) -> PathBuf {
        dir.join(format!("{key}.json"))
    }
}
