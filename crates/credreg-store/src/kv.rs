//! # Store Trait and In-Memory Implementation
//!
//! The get/put contract the transition engine is written against, and
//! the `BTreeMap`-backed implementation used by tests and demos.

use std::collections::BTreeMap;

use crate::error::StoreError;

/// The key-value contract the registry consumes.
///
/// Implementations are expected to provide per-key linearizable get/put;
/// the engine layers no locking of its own on top. Each engine operation
/// is a single read followed by at most one write within one logical
/// unit of work.
pub trait KvStore {
    /// Fetch the value at `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` at `key`, overwriting any existing value.
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;
}

/// In-memory store over a `BTreeMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_is_none_not_error() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_put_then_get() {
        let mut store = MemoryStore::new();
        store.put("1", b"alpha".to_vec()).unwrap();
        assert_eq!(store.get("1").unwrap(), Some(b"alpha".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_put_overwrites() {
        let mut store = MemoryStore::new();
        store.put("1", b"alpha".to_vec()).unwrap();
        store.put("1", b"beta".to_vec()).unwrap();
        assert_eq!(store.get("1").unwrap(), Some(b"beta".to_vec()));
        assert_eq!(store.len(), 1);
    }
}
