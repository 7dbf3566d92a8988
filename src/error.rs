//! Error types for the cache facade
//!
//! Provides unified error handling using thiserror.

use std::string::FromUtf8Error;

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache facade.
///
/// A missing key is not an error: lookups report it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The store could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// The store rejected a write (set or flush)
    #[error("Write error: {0}")]
    Write(String),

    /// The store rejected a read for a reason other than connectivity
    #[error("Read error: {0}")]
    Read(String),

    /// Stored bytes are not valid UTF-8
    #[error("Decode error: {0}")]
    Decode(#[from] FromUtf8Error),

    /// Stored bytes are not a number of the requested type
    #[error("Parse error: {0}")]
    Parse(String),

    /// A caller-supplied converter failed
    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl CacheError {
    /// Returns true if the error means the store was unreachable.
    pub fn is_connection(&self) -> bool {
        matches!(self, CacheError::Connection(_))
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache facade.
pub type Result<T> = std::result::Result<T, CacheError>;
