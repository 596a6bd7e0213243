//! In-memory store

use rustc_hash::FxHashMap;

use crate::storage::{KeyValueStore, StorageError};

/// A [`KeyValueStore`] that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn set_then_get() -> TestResult {
        let mut store = MemoryStore::new();

        store.set("cart", "[]")?;

        assert_eq!(store.get("cart")?.as_deref(), Some("[]"));
        assert_eq!(store.get("other")?, None);
        assert_eq!(store.len(), 1);

        Ok(())
    }

    #[test]
    fn set_replaces_value() -> TestResult {
        let mut store = MemoryStore::new();

        store.set("cart", "first")?;
        store.set("cart", "second")?;

        assert_eq!(store.get("cart")?.as_deref(), Some("second"));

        Ok(())
    }

    #[test]
    fn remove_missing_key_is_ok() -> TestResult {
        let mut store = MemoryStore::new();

        store.remove("missing")?;
        store.set("cart", "[]")?;
        store.remove("cart")?;

        assert!(store.is_empty());

        Ok(())
    }
}
