//! In-process store
//!
//! A string-valued namespace held in memory. Cloning a [`MemoryStore`]
//! yields another handle to the same namespace, which is how several
//! facades (or a test poking raw strings in) share one store.

use crate::{PersistentStore, StoreResult};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Shared in-memory string store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<FxHashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// List keys currently stored, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.data.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl PersistentStore for MemoryStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.data.write().remove(key);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.data.write().clear();
        Ok(())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.data.read().len())
    }
}
