//! Named converters for raw stored bytes.
//!
//! Each function has the shape `FnOnce(Vec<u8>) -> Result<T>` and can be
//! passed directly to [`Cache::get_with`](crate::cache::Cache::get_with).

use crate::error::{CacheError, Result};

/// Returns the raw bytes unchanged.
pub fn to_bytes(raw: Vec<u8>) -> Result<Vec<u8>> {
    Ok(raw)
}

/// Decodes the bytes as UTF-8 text.
///
/// Invalid UTF-8 is reported as [`CacheError::Decode`].
pub fn to_text(raw: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(raw)?)
}

/// Parses the bytes as a base-10 signed integer.
///
/// Whitespace is not trimmed. Anything else is [`CacheError::Parse`].
pub fn to_integer(raw: Vec<u8>) -> Result<i64> {
    let text = std::str::from_utf8(&raw).map_err(|e| CacheError::Parse(e.to_string()))?;
    text.parse::<i64>()
        .map_err(|e| CacheError::Parse(format!("{:?} is not an integer: {}", text, e)))
}

/// Parses the bytes as a floating-point number.
pub fn to_float(raw: Vec<u8>) -> Result<f64> {
    let text = std::str::from_utf8(&raw).map_err(|e| CacheError::Parse(e.to_string()))?;
    text.parse::<f64>()
        .map_err(|e| CacheError::Parse(format!("{:?} is not a float: {}", text, e)))
}
