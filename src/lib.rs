//! Redis Cache - a small cache facade over Redis
//!
//! Stores scalar values under random UUID keys and reads them back as raw
//! bytes or converted to text, integers or floats.

pub mod backend;
pub mod cache;
pub mod config;
pub mod error;

pub use backend::{KeyValueStore, MemoryStore, RedisStore};
pub use cache::{Cache, CacheStats, Value};
pub use config::Config;
pub use error::{CacheError, Result};
