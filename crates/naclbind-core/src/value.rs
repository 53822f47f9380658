//! Host values crossing the binding boundary.
//!
//! A host hands the surface loosely-typed values; the surface copies buffer
//! contents in on the way in and allocates fresh buffers on the way out, so
//! no result ever aliases an input or the caller's memory.

/// A value as seen at the host boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Opaque byte buffer
    Buffer(Vec<u8>),
    /// Host integer (may be negative or out of range for a length)
    Integer(i64),
    /// Host string; never accepted where bytes are expected
    Text(String),
    /// Absence of a value; returned by successful verify calls
    Null,
    /// Ordered list; returned by keypair calls as `[public, secret]`
    Array(Vec<Value>),
}

impl Value {
    /// Short name of this value's shape, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Buffer(_) => "buffer",
            Self::Integer(_) => "integer",
            Self::Text(_) => "text",
            Self::Null => "null",
            Self::Array(_) => "array",
        }
    }

    /// Borrow the bytes of a `Buffer`.
    pub fn as_buffer(&self) -> Option<&[u8]> {
        match self {
            Self::Buffer(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        from_owned_bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self::Buffer(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Value {
    fn from(bytes: [u8; N]) -> Self {
        Self::Buffer(bytes.to_vec())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// Copy a host buffer into owned bytes. `None` for any non-buffer shape.
pub fn to_owned_bytes(value: &Value) -> Option<Vec<u8>> {
    value.as_buffer().map(<[u8]>::to_vec)
}

/// Hand owned bytes back to the host as a new buffer.
pub fn from_owned_bytes(bytes: Vec<u8>) -> Value {
    Value::Buffer(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_owned_bytes_copies_exactly() {
        let value = Value::Buffer(vec![1, 2, 3]);
        let mut owned = to_owned_bytes(&value).unwrap();

        owned[0] = 99;
        assert_eq!(value, Value::Buffer(vec![1, 2, 3]), "caller buffer must not alias the copy");
        assert_eq!(owned, vec![99, 2, 3]);
    }

    #[test]
    fn to_owned_bytes_preserves_empty_buffer() {
        assert_eq!(to_owned_bytes(&Value::Buffer(Vec::new())), Some(Vec::new()));
    }

    #[test]
    fn non_buffers_do_not_marshal() {
        assert_eq!(to_owned_bytes(&Value::Integer(0)), None);
        assert_eq!(to_owned_bytes(&Value::Text("abc".into())), None);
        assert_eq!(to_owned_bytes(&Value::Null), None);
        assert_eq!(to_owned_bytes(&Value::Array(vec![Value::Buffer(vec![1])])), None);
    }

    #[test]
    fn shapes_are_named() {
        assert_eq!(Value::from(vec![1u8]).shape(), "buffer");
        assert_eq!(Value::from(7i64).shape(), "integer");
        assert_eq!(Value::from("x").shape(), "text");
        assert_eq!(Value::Null.shape(), "null");
        assert_eq!(Value::Array(Vec::new()).shape(), "array");
    }
}
