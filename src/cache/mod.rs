//! Cache Module
//!
//! Provides the cache facade: random-key storage of scalar values and typed
//! retrieval over an external key-value store.

pub mod convert;
mod stats;
mod store;
mod value;


// Re-export public types
pub use stats::CacheStats;
pub use store::Cache;
pub use value::Value;
