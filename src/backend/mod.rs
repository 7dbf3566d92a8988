//! Store Backend Module
//!
//! Abstracts the external key-value store behind the three primitives the
//! cache facade needs.

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;

use crate::error::Result;

// == Key-Value Store ==
/// A key-value store the cache facade delegates to.
///
/// Every call is blocking. Implementations decide what "unreachable" means
/// and report it as [`CacheError::Connection`](crate::error::CacheError::Connection).
pub trait KeyValueStore {
    /// Associates `value` with `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;

    /// Returns the bytes stored under `key`, or `None` if nothing is stored.
    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Removes every entry in the store's namespace.
    fn flush_all(&mut self) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn flush_all(&mut self) -> Result<()> {
        (**self).flush_all()
    }
}
