//! Cache Value Module
//!
//! Defines the scalar values the cache accepts and their byte encoding.

// == Value ==
/// A scalar value that can be stored in the cache.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 text
    Text(String),
    /// Opaque binary blob
    Bytes(Vec<u8>),
    /// Signed integer
    Integer(i64),
    /// Floating-point number
    Float(f64),
}

impl Value {
    // == Encoding ==
    /// Serializes the value to the byte representation written to the store.
    ///
    /// Integers are written in base 10. Floats use the shortest decimal that
    /// parses back to the same number and always carries a fraction or an
    /// exponent (`1.0`, `0.1`, `1e100`).
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Value::Text(text) => text.as_bytes().to_vec(),
            Value::Bytes(bytes) => bytes.clone(),
            Value::Integer(n) => n.to_string().into_bytes(),
            Value::Float(x) => format!("{:?}", x).into_bytes(),
        }
    }

    /// Consumes the value, returning its byte representation.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Value::Text(text) => text.into_bytes(),
            Value::Bytes(bytes) => bytes,
            other => other.to_bytes(),
        }
    }

    /// Returns the name of the variant, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
        }
    }
}

// == Conversions ==
impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_encoding() {
        assert_eq!(Value::from("hello").to_bytes(), b"hello".to_vec());
        assert_eq!(Value::from("héllo".to_string()).into_bytes(), "héllo".as_bytes());
    }

    #[test]
    fn test_bytes_encoding_is_unchanged() {
        let raw = vec![0u8, 159, 146, 150, 255];
        assert_eq!(Value::from(raw.clone()).to_bytes(), raw);
        assert_eq!(Value::from(&raw[..]).into_bytes(), raw);
    }

    #[test]
    fn test_integer_encoding() {
        assert_eq!(Value::from(42).to_bytes(), b"42".to_vec());
        assert_eq!(Value::from(-7i64).to_bytes(), b"-7".to_vec());
        assert_eq!(
            Value::from(i64::MIN).to_bytes(),
            b"-9223372036854775808".to_vec()
        );
    }

    #[test]
    fn test_float_encoding_keeps_fraction() {
        assert_eq!(Value::from(1.0).to_bytes(), b"1.0".to_vec());
        assert_eq!(Value::from(2.75).to_bytes(), b"2.75".to_vec());
        assert_eq!(Value::from(-0.5).to_bytes(), b"-0.5".to_vec());
        assert_eq!(Value::from(1e100).to_bytes(), b"1e100".to_vec());
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::from("a").kind(), "text");
        assert_eq!(Value::from(vec![1u8]).kind(), "bytes");
        assert_eq!(Value::from(1).kind(), "integer");
        assert_eq!(Value::from(1.5).kind(), "float");
    }
}
