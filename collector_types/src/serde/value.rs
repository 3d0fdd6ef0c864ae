use derive_more::From;
use std::str;

mod deser;

/// A decoded field value.
///
/// All integer widths widen to `i64`. Strings stay raw bytes because payloads
/// may carry arbitrary captured bytes. Lists and sets both decode to `List`.
#[derive(PartialEq, Eq, Clone, From, Debug)]
pub enum DecodedValue {
    Bool(bool),
    Int(i64),
    Bytes(Vec<u8>),
    List(Vec<DecodedValue>),
}

impl DecodedValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }
    /// The byte string as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| str::from_utf8(b).ok())
    }
    pub fn as_list(&self) -> Option<&[DecodedValue]> {
        match self {
            Self::List(elems) => Some(elems),
            _ => None,
        }
    }
}

impl From<&str> for DecodedValue {
    fn from(s: &str) -> Self {
        Self::Bytes(s.as_bytes().to_vec())
    }
}
impl From<String> for DecodedValue {
    fn from(s: String) -> Self {
        Self::Bytes(s.into_bytes())
    }
}
