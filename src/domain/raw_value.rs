// SPDX-License-Identifier: MIT OR Apache-2.0

//! Untyped values as produced by a value source.
//!
//! This module provides the `RawValue` type, a closed set of shapes a source can
//! hand back. It carries no conversion logic of its own: the typed registry
//! decides whether a value has exactly the requested type.

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// An untyped value of unknown shape.
///
/// `Map` keeps its entries in source order and allows keys of any shape, so a
/// mapping with non-string keys can be represented and rejected later.
///
/// # Examples
///
/// ```
/// use typed_registry::domain::RawValue;
///
/// let value = RawValue::from(vec!["a", "b"]);
/// assert_eq!(value.type_name(), "list");
/// assert_eq!(RawValue::from("8080").render(), "\"8080\"");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A double-precision float.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered, zero-indexed sequence.
    List(Vec<RawValue>),
    /// An associative structure with entries in source order.
    Map(Vec<(RawValue, RawValue)>),
    /// A value the registry cannot look into.
    Opaque(Opaque),
}

impl RawValue {
    /// Returns the runtime type name of the value.
    ///
    /// Opaque values report the name of their concrete Rust type.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "bool",
            RawValue::Int(_) => "int",
            RawValue::Float(_) => "float",
            RawValue::String(_) => "string",
            RawValue::List(_) => "list",
            RawValue::Map(_) => "map",
            RawValue::Opaque(opaque) => opaque.type_name(),
        }
    }

    /// Renders the value for error messages.
    ///
    /// Scalars and null render as literals. Lists, maps and opaque values render
    /// as their type name only, so their contents never end up in error text.
    ///
    /// ```
    /// use typed_registry::domain::RawValue;
    ///
    /// assert_eq!(RawValue::Null.render(), "null");
    /// assert_eq!(RawValue::Bool(true).render(), "true");
    /// assert_eq!(RawValue::Float(1.0).render(), "1.0");
    /// assert_eq!(RawValue::from(vec![1, 2]).render(), "list");
    /// ```
    pub fn render(&self) -> String {
        match self {
            RawValue::Null => "null".to_string(),
            RawValue::Bool(b) => b.to_string(),
            RawValue::Int(n) => n.to_string(),
            RawValue::Float(f) => format!("{:?}", f),
            RawValue::String(s) => format!("{:?}", s),
            other => other.type_name().to_string(),
        }
    }

    /// Returns `true` if the value is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Consumes the value and returns its elements if it has list shape.
    ///
    /// A `List` always has list shape. A `Map` has list shape only when its keys
    /// are exactly the integers `0..n` in order.
    pub fn into_list(self) -> Option<Vec<RawValue>> {
        match self {
            RawValue::List(items) => Some(items),
            RawValue::Map(entries) => {
                let contiguous = entries.iter().enumerate().all(|(index, (key, _))| {
                    matches!(key, RawValue::Int(n) if usize::try_from(*n) == Ok(index))
                });
                contiguous.then(|| entries.into_iter().map(|(_, value)| value).collect())
            }
            _ => None,
        }
    }

    /// Consumes the value and returns its entries if every key is a string.
    ///
    /// An empty `List` has no keys and yields no entries.
    pub fn into_string_entries(self) -> Option<Vec<(String, RawValue)>> {
        match self {
            RawValue::List(items) if items.is_empty() => Some(Vec::new()),
            RawValue::Map(entries) => entries
                .into_iter()
                .map(|(key, value)| match key {
                    RawValue::String(key) => Some((key, value)),
                    _ => None,
                })
                .collect(),
            _ => None,
        }
    }

    /// Looks up a direct child of a `Map` by string key.
    pub fn get_entry(&self, key: &str) -> Option<&RawValue> {
        match self {
            RawValue::Map(entries) => entries
                .iter()
                .find(|(k, _)| matches!(k, RawValue::String(s) if s == key))
                .map(|(_, value)| value),
            _ => None,
        }
    }
}

/// A shared handle to a value of arbitrary Rust type.
///
/// Two opaque values are equal only when they point at the same allocation.
#[derive(Clone)]
pub struct Opaque {
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
    /// Wraps a value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            value: Arc::new(value),
        }
    }

    /// The name of the wrapped type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns a reference to the wrapped value if it is of type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque({})", self.type_name)
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        Arc::as_ptr(&self.value) as *const () == Arc::as_ptr(&other.value) as *const ()
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Int(n)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Int(i64::from(n))
    }
}

impl From<f64> for RawValue {
    fn from(f: f64) -> Self {
        RawValue::Float(f)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::String(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::String(s)
    }
}

impl From<Opaque> for RawValue {
    fn from(opaque: Opaque) -> Self {
        RawValue::Opaque(opaque)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(items: Vec<T>) -> Self {
        RawValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<RawValue>> From<HashMap<String, T>> for RawValue {
    fn from(map: HashMap<String, T>) -> Self {
        RawValue::Map(
            map.into_iter()
                .map(|(key, value)| (RawValue::String(key), value.into()))
                .collect(),
        )
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Null, Into::into)
    }
}

struct RawValueVisitor;

impl<'de> Visitor<'de> for RawValueVisitor {
    type Value = RawValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any self-describing value")
    }

    fn visit_bool<E>(self, b: bool) -> Result<RawValue, E> {
        Ok(RawValue::Bool(b))
    }

    fn visit_i64<E>(self, n: i64) -> Result<RawValue, E> {
        Ok(RawValue::Int(n))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<RawValue, E> {
        i64::try_from(n)
            .map(RawValue::Int)
            .map_err(|_| E::custom(format!("integer {} does not fit in i64", n)))
    }

    fn visit_f64<E>(self, f: f64) -> Result<RawValue, E> {
        Ok(RawValue::Float(f))
    }

    fn visit_str<E>(self, s: &str) -> Result<RawValue, E> {
        Ok(RawValue::String(s.to_string()))
    }

    fn visit_string<E>(self, s: String) -> Result<RawValue, E> {
        Ok(RawValue::String(s))
    }

    fn visit_none<E>(self) -> Result<RawValue, E> {
        Ok(RawValue::Null)
    }

    fn visit_unit<E>(self) -> Result<RawValue, E> {
        Ok(RawValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RawValue, D::Error> {
        RawValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(RawValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawValue, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry()? {
            entries.push(entry);
        }
        Ok(RawValue::Map(entries))
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawValueVisitor)
    }
}
