//! Redis Store Module
//!
//! Blocking Redis backend built on the `redis` crate.

use std::fmt;

use redis::{Client, Commands, Connection, RedisError};
use tracing::{debug, info};

use crate::backend::KeyValueStore;
use crate::error::{CacheError, Result};

// == Redis Store ==
/// A single blocking connection to a Redis server.
///
/// The connection is owned by the store and closed when it is dropped.
/// `RedisStore` is `Send` but not `Sync`; share it across threads behind a
/// mutex.
pub struct RedisStore {
    conn: Connection,
    url: String,
}

impl RedisStore {
    // == Constructor ==
    /// Opens a connection to the Redis server at `url`.
    ///
    /// # Arguments
    /// * `url` - The redis URL (e.g., "redis://127.0.0.1/")
    pub fn connect(url: &str) -> Result<Self> {
        let client = Client::open(url).map_err(|e| CacheError::Connection(e.to_string()))?;
        let conn = client
            .get_connection()
            .map_err(|e| CacheError::Connection(e.to_string()))?;
        info!("Connected to Redis at {}", url);

        Ok(Self {
            conn,
            url: url.to_string(),
        })
    }

    /// Returns the URL this store is connected to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisStore").field("url", &self.url).finish()
    }
}

/// Maps a Redis error to `Connection` when the server was unreachable,
/// otherwise to the variant built by `rejected`.
fn classify(err: RedisError, rejected: fn(String) -> CacheError) -> CacheError {
    if err.is_io_error()
        || err.is_connection_refusal()
        || err.is_connection_dropped()
        || err.is_timeout()
    {
        CacheError::Connection(err.to_string())
    } else {
        rejected(err.to_string())
    }
}

impl KeyValueStore for RedisStore {
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        debug!("SET {} ({} bytes)", key, value.len());
        self.conn
            .set::<_, _, ()>(key, value)
            .map_err(|e| classify(e, CacheError::Write))
    }

    fn get(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        debug!("GET {}", key);
        self.conn
            .get::<_, Option<Vec<u8>>>(key)
            .map_err(|e| classify(e, CacheError::Read))
    }

    fn flush_all(&mut self) -> Result<()> {
        debug!("FLUSHDB on {}", self.url);
        redis::cmd("FLUSHDB")
            .query::<()>(&mut self.conn)
            .map_err(|e| classify(e, CacheError::Write))
    }
}
