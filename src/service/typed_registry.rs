// SPDX-License-Identifier: MIT OR Apache-2.0

//! The typed registry: exact-type access over a value source.
//!
//! Every retrieval reads the source once and validates the raw value against the
//! requested primitive type without any coercion. Four modes are offered per
//! type: strict, nullable, defaulted, and collection (list or map).

use crate::domain::{Primitive, RawValue, Result, TypeError};
use crate::ports::ValueSource;
use std::collections::HashMap;

/// Strongly-typed accessor over a [`ValueSource`].
///
/// The registry holds nothing but its source. It never logs, never retries, and
/// never caches; it is `Send + Sync` whenever the source is.
///
/// # Examples
///
/// ```rust
/// use typed_registry::adapters::MapSource;
/// use typed_registry::service::TypedRegistry;
///
/// let source = MapSource::new()
///     .with_value("port", 8080)
///     .with_value("host", "localhost")
///     .with_value("legacy_port", "8080");
/// let registry = TypedRegistry::new(source);
///
/// assert_eq!(registry.get_int("port").unwrap(), 8080);
/// assert_eq!(registry.get_string("host").unwrap(), "localhost");
/// assert!(registry.get_int("legacy_port").is_err());
/// assert_eq!(registry.get_int_or("timeout", 30), 30);
/// ```
#[derive(Debug, Clone)]
pub struct TypedRegistry<S> {
    source: S,
}

impl<S: ValueSource> TypedRegistry<S> {
    /// Creates a registry over `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the registry and returns the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Returns `true` if the source holds a non-null value for `key`.
    pub fn has(&self, key: &str) -> bool {
        matches!(self.source.get(key), Some(value) if !value.is_null())
    }

    /// Retrieves a value of exactly type `T`.
    ///
    /// Fails with [`TypeError`] when the key is absent, null, or holds any other
    /// type.
    pub fn get<T: Primitive>(&self, key: &str) -> Result<T> {
        match self.source.get(key) {
            Some(raw) => T::from_raw(raw).map_err(|raw| mismatch(key, T::DESCRIPTOR, &raw)),
            None => Err(missing(key, T::DESCRIPTOR)),
        }
    }

    /// Retrieves a value of type `T`, treating absence and null as `None`.
    ///
    /// A present, non-null value of another type still fails, with expected type
    /// `T|null`.
    pub fn get_nullable<T: Primitive>(&self, key: &str) -> Result<Option<T>> {
        match self.source.get(key) {
            None | Some(RawValue::Null) => Ok(None),
            Some(raw) => T::from_raw(raw)
                .map(Some)
                .map_err(|raw| mismatch(key, &format!("{}|null", T::DESCRIPTOR), &raw)),
        }
    }

    /// Retrieves a value of type `T`, or `default` if [`get`](Self::get) fails.
    pub fn get_or<T: Primitive>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Retrieves a list whose elements are all of type `T`.
    ///
    /// A value without list shape fails against `key` with expected type
    /// `list<T>`. Otherwise elements are checked in index order and the first bad
    /// one fails against `key[index]`.
    pub fn get_list<T: Primitive>(&self, key: &str) -> Result<Vec<T>> {
        let expected = format!("list<{}>", T::DESCRIPTOR);
        let raw = self.source.get(key).ok_or_else(|| missing(key, &expected))?;
        let actual = raw.render();
        let items = raw
            .into_list()
            .ok_or_else(|| TypeError::new(key, &expected, actual))?;

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                T::from_raw(item)
                    .map_err(|item| mismatch(&format!("{}[{}]", key, index), T::DESCRIPTOR, &item))
            })
            .collect()
    }

    /// Retrieves a string-keyed map whose values are all of type `T`.
    ///
    /// Any non-string key or bad value fails against `key` itself with expected
    /// type `map<string,T>`; the offending entry is not identified.
    pub fn get_map<T: Primitive>(&self, key: &str) -> Result<HashMap<String, T>> {
        let expected = format!("map<string,{}>", T::DESCRIPTOR);
        let raw = self.source.get(key).ok_or_else(|| missing(key, &expected))?;
        let actual = raw.render();
        let fail = || TypeError::new(key, &expected, &actual);

        raw.into_string_entries()
            .ok_or_else(fail)?
            .into_iter()
            .map(|(name, value)| T::from_raw(value).map(|v| (name, v)).map_err(|_| fail()))
            .collect()
    }

    /// Retrieves a string.
    pub fn get_string(&self, key: &str) -> Result<String> {
        self.get(key)
    }

    /// Retrieves an integer.
    pub fn get_int(&self, key: &str) -> Result<i64> {
        self.get(key)
    }

    /// Retrieves a boolean.
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get(key)
    }

    /// Retrieves a float. Integers are not accepted.
    pub fn get_float(&self, key: &str) -> Result<f64> {
        self.get(key)
    }

    /// Retrieves a string, or `None` if absent or null.
    pub fn get_nullable_string(&self, key: &str) -> Result<Option<String>> {
        self.get_nullable(key)
    }

    /// Retrieves an integer, or `None` if absent or null.
    pub fn get_nullable_int(&self, key: &str) -> Result<Option<i64>> {
        self.get_nullable(key)
    }

    /// Retrieves a boolean, or `None` if absent or null.
    pub fn get_nullable_bool(&self, key: &str) -> Result<Option<bool>> {
        self.get_nullable(key)
    }

    /// Retrieves a float, or `None` if absent or null.
    pub fn get_nullable_float(&self, key: &str) -> Result<Option<f64>> {
        self.get_nullable(key)
    }

    /// Retrieves a string, falling back to `default`.
    pub fn get_string_or(&self, key: &str, default: impl Into<String>) -> String {
        self.get_or(key, default.into())
    }

    /// Retrieves an integer, falling back to `default`.
    pub fn get_int_or(&self, key: &str, default: i64) -> i64 {
        self.get_or(key, default)
    }

    /// Retrieves a boolean, falling back to `default`.
    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_or(key, default)
    }

    /// Retrieves a float, falling back to `default`.
    pub fn get_float_or(&self, key: &str, default: f64) -> f64 {
        self.get_or(key, default)
    }

    /// Retrieves a list of strings.
    pub fn get_string_list(&self, key: &str) -> Result<Vec<String>> {
        self.get_list(key)
    }

    /// Retrieves a list of integers.
    pub fn get_int_list(&self, key: &str) -> Result<Vec<i64>> {
        self.get_list(key)
    }

    /// Retrieves a list of booleans.
    pub fn get_bool_list(&self, key: &str) -> Result<Vec<bool>> {
        self.get_list(key)
    }

    /// Retrieves a list of floats.
    pub fn get_float_list(&self, key: &str) -> Result<Vec<f64>> {
        self.get_list(key)
    }

    /// Retrieves a string-keyed map of strings.
    pub fn get_string_map(&self, key: &str) -> Result<HashMap<String, String>> {
        self.get_map(key)
    }

    /// Retrieves a string-keyed map of integers.
    pub fn get_int_map(&self, key: &str) -> Result<HashMap<String, i64>> {
        self.get_map(key)
    }

    /// Retrieves a string-keyed map of booleans.
    pub fn get_bool_map(&self, key: &str) -> Result<HashMap<String, bool>> {
        self.get_map(key)
    }

    /// Retrieves a string-keyed map of floats.
    pub fn get_float_map(&self, key: &str) -> Result<HashMap<String, f64>> {
        self.get_map(key)
    }
}

fn missing(key: &str, expected: &str) -> TypeError {
    TypeError::new(key, expected, RawValue::Null.render())
}

fn mismatch(key: &str, expected: &str, found: &RawValue) -> TypeError {
    TypeError::new(key, expected, found.render())
}
