//! JSON value types.
//!
//! This module defines the [`Value`] enum, one node of a parsed JSON tree.
//! Strings and object keys are [`BStr`] views into the parsed input, so a tree
//! can never outlive the buffer it was parsed from.
//!
//! Numbers are always `f64`. Whether a number was written as an integer or a
//! float is not retained, and integers beyond 2^53 lose exactness.
use alloc::vec::Vec;
use core::fmt;

use bstr::BStr;

/// An array payload: elements in input order.
pub type Array<'src> = Vec<Value<'src>>;

/// An object payload: members in input order, duplicates retained.
pub type Object<'src> = Vec<Member<'src>>;

/// A JSON value whose strings borrow from the input buffer.
///
/// # Examples
///
/// ```
/// use jsonview::{parse, Value};
///
/// let doc = parse(br#"{"name": "jsonview", "tags": [1, true, null]}"#).unwrap();
/// let root = doc.value;
/// assert_eq!(root.get("name").and_then(Value::as_str), Some("jsonview".into()));
/// assert_eq!(root.get("tags").and_then(Value::as_array).map(Vec::len), Some(3));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    /// A JSON `null`.
    Null,
    /// A JSON boolean.
    Bool(bool),
    /// A JSON number, integers included.
    Number(f64),
    /// A JSON string, exactly as written between its quotes.
    String(&'src BStr),
    /// A JSON array.
    Array(Array<'src>),
    /// A JSON object.
    Object(Object<'src>),
}

/// One `"key": value` pair of an object.
#[derive(Clone, Debug, PartialEq)]
pub struct Member<'src> {
    /// The key, exactly as written between its quotes.
    pub key: &'src BStr,
    /// The member's value.
    pub value: Value<'src>,
}

impl Default for Value<'_> {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl<'src> From<&'src BStr> for Value<'src> {
    fn from(v: &'src BStr) -> Self {
        Self::String(v)
    }
}

impl<'src> From<&'src str> for Value<'src> {
    fn from(v: &'src str) -> Self {
        Self::String(v.into())
    }
}

impl<'src> From<Vec<Value<'src>>> for Value<'src> {
    fn from(v: Vec<Value<'src>>) -> Self {
        Self::Array(v)
    }
}

impl<'src> From<Vec<Member<'src>>> for Value<'src> {
    fn from(v: Vec<Member<'src>>) -> Self {
        Self::Object(v)
    }
}

impl Value<'_> {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonview::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Bool(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Bool`].
    ///
    /// [`Bool`]: Value::Bool
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns the boolean if this is a [`Value::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    /// Returns the number if this is a [`Value::Number`].
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        if let Self::Number(v) = self {
            Some(*v)
        } else {
            None
        }
    }
}

impl<'src> Value<'src> {
    /// Returns the input view if this is a [`Value::String`].
    ///
    /// The returned slice borrows from the input, not from `self`.
    #[must_use]
    pub fn as_str(&self) -> Option<&'src BStr> {
        if let Self::String(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Borrows the elements if this is a [`Value::Array`].
    #[must_use]
    pub fn as_array(&self) -> Option<&Array<'src>> {
        if let Self::Array(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Borrows the members if this is a [`Value::Object`].
    #[must_use]
    pub fn as_object(&self) -> Option<&Object<'src>> {
        if let Self::Object(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Looks up `key` in an object.
    ///
    /// Duplicate keys are all kept by the parser; this returns the value of
    /// the **last** member with a matching key. Use [`Value::get_all`] to see
    /// every occurrence. Returns `None` for non-objects.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonview::parse;
    ///
    /// let doc = parse(br#"{"a": 1, "a": 2}"#).unwrap();
    /// assert_eq!(doc.value.get("a").and_then(|v| v.as_number()), Some(2.0));
    /// ```
    #[must_use]
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Value<'src>> {
        self.get_all(key).last()
    }

    /// Iterates over the values of every member named `key`, in input order.
    pub fn get_all(&self, key: impl AsRef<[u8]>) -> impl Iterator<Item = &Value<'src>> {
        let members = self.as_object().map_or(&[][..], Vec::as_slice);
        members
            .iter()
            .filter(move |m| m.key == key.as_ref())
            .map(|m| &m.value)
    }
}

/// Writes compact JSON. Strings are written as-is, without re-escaping.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Array(arr) => {
                f.write_str("[")?;
                let mut first = true;
                for v in arr {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(members) => {
                f.write_str("{")?;
                let mut first = true;
                for Member { key, value } in members {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "\"{key}\":{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use bstr::ByteSlice;
    use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

    use super::{Member, Value};

    /// Objects serialize as maps in input order; duplicate keys are emitted
    /// once per occurrence. Non-UTF-8 bytes are replaced with U+FFFD.
    impl Serialize for Value<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Value::Null => serializer.serialize_unit(),
                Value::Bool(b) => serializer.serialize_bool(*b),
                Value::Number(n) => serializer.serialize_f64(*n),
                Value::String(s) => serializer.serialize_str(&s.to_str_lossy()),
                Value::Array(arr) => {
                    let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                    for v in arr {
                        seq.serialize_element(v)?;
                    }
                    seq.end()
                }
                Value::Object(members) => {
                    let mut map = serializer.serialize_map(Some(members.len()))?;
                    for Member { key, value } in members {
                        map.serialize_entry(&*key.to_str_lossy(), value)?;
                    }
                    map.end()
                }
            }
        }
    }
}
