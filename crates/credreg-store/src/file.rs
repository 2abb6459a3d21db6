//! # File-Backed Store
//!
//! A [`KvStore`] persisted as one JSON document on disk. The document is
//! loaded in full on open and rewritten in full on every put, which is
//! proportionate for a registry document of this size and keeps the
//! store contract's single-unit-of-work shape: a put either lands the
//! whole document or fails.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::kv::KvStore;

/// Key-value store persisted as a single JSON document.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, Vec<u8>>,
}

impl JsonFileStore {
    /// Open the store document at `path`, creating an empty store if the
    /// file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read,
    /// or [`StoreError::Document`] if its contents are not a valid store
    /// document.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    /// The path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(&self.entries)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        self.persist()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("registry.json")).unwrap();
        assert_eq!(store.get("1").unwrap(), None);
    }

    #[test]
    fn test_put_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.put("1", b"alpha".to_vec()).unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("1").unwrap(), Some(b"alpha".to_vec()));
    }

    #[test]
    fn test_corrupt_document_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");
        fs::write(&path, b"not a document").unwrap();

        match JsonFileStore::open(&path) {
            Err(StoreError::Document(_)) => {}
            other => panic!("expected Document error, got: {other:?}"),
        }
    }
}
