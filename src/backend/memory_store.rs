//! In-Memory Store Module
//!
//! A process-local key-value store with the same contract as the Redis
//! backend. Used as a test double and for running without a server.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::backend::KeyValueStore;
use crate::error::{CacheError, Result};

// == Memory Store ==
/// In-memory key-value store.
///
/// Clones share the same underlying map, the way two connections share one
/// server.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Length ==
    /// Returns the number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> CacheError {
    CacheError::Connection("memory store lock poisoned".to_string())
}

impl KeyValueStore for MemoryStore {
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn flush_all(&mut self) -> Result<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.clear();
        Ok(())
    }
}
