//! Cache Facade Module
//!
//! Stores scalar values under freshly minted keys and reads them back with
//! an optional conversion step.

use tracing::{debug, info};
use uuid::Uuid;

use crate::backend::{KeyValueStore, RedisStore};
use crate::cache::{convert, CacheStats, Value};
use crate::config::Config;
use crate::error::Result;

// == Cache ==
/// Facade over an external key-value store.
///
/// All operations take `&mut self` and block on the store. Share an instance
/// across threads by wrapping it in a `Mutex`.
#[derive(Debug)]
pub struct Cache<S: KeyValueStore> {
    /// Owned connection handle to the store
    store: S,
    /// Usage counters for this instance
    stats: CacheStats,
}

impl<S: KeyValueStore> Cache<S> {
    // == Constructor ==
    /// Creates a cache over `store` and clears everything in it.
    ///
    /// The flush is destructive: any data already in the store's namespace
    /// is lost. Use [`Cache::open`] to keep existing data.
    pub fn new(mut store: S) -> Result<Self> {
        store.flush_all()?;
        info!("Cache initialized, store flushed");
        Ok(Self::open(store))
    }

    /// Creates a cache over `store` without touching existing data.
    pub fn open(store: S) -> Self {
        Self {
            store,
            stats: CacheStats::new(),
        }
    }

    // == Store ==
    /// Stores `value` under a new random key and returns that key.
    ///
    /// Every call mints a new UUID v4 key, so storing the same value twice
    /// yields two entries.
    pub fn store(&mut self, value: impl Into<Value>) -> Result<String> {
        let value = value.into();
        let key = Uuid::new_v4().to_string();

        self.store.set(&key, &value.to_bytes())?;
        self.stats.record_store();
        debug!("Stored {} value under {}", value.kind(), key);

        Ok(key)
    }

    // == Get ==
    /// Returns the raw bytes stored under `key`, or `None` if nothing is stored.
    pub fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        self.get_with(key, convert::to_bytes)
    }

    /// Returns the value stored under `key` passed through `converter`.
    ///
    /// The converter only runs when a value is present; a missing key returns
    /// `Ok(None)` without calling it. Converter errors are returned as-is.
    pub fn get_with<T, F>(&mut self, key: &str, converter: F) -> Result<Option<T>>
    where
        F: FnOnce(Vec<u8>) -> Result<T>,
    {
        match self.store.get(key)? {
            Some(raw) => {
                self.stats.record_hit();
                debug!("Hit for {} ({} bytes)", key, raw.len());
                converter(raw).map(Some)
            }
            None => {
                self.stats.record_miss();
                debug!("Miss for {}", key);
                Ok(None)
            }
        }
    }

    // == Typed Getters ==
    /// Returns the value under `key` decoded as UTF-8 text.
    pub fn get_str(&mut self, key: &str) -> Result<Option<String>> {
        self.get_with(key, convert::to_text)
    }

    /// Returns the value under `key` parsed as a base-10 integer.
    pub fn get_int(&mut self, key: &str) -> Result<Option<i64>> {
        self.get_with(key, convert::to_integer)
    }

    /// Returns the value under `key` parsed as a floating-point number.
    pub fn get_float(&mut self, key: &str) -> Result<Option<f64>> {
        self.get_with(key, convert::to_float)
    }

    // == Stats ==
    /// Returns a snapshot of this instance's usage counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    /// Consumes the cache and returns the underlying store handle.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl Cache<RedisStore> {
    /// Connects to Redis using `config`.
    ///
    /// Flushes the store only when `config.flush_on_start` is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = RedisStore::connect(&config.redis_url)?;
        if config.flush_on_start {
            Self::new(store)
        } else {
            info!("Cache initialized, existing data kept");
            Ok(Self::open(store))
        }
    }
}
