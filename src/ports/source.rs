// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value source trait definition.
//!
//! This module defines the `ValueSource` trait, the single capability the typed
//! registry needs from the outside world: look up a raw value by string key.

use crate::domain::RawValue;
use std::sync::Arc;

/// A supplier of untyped values keyed by string.
///
/// `get` returns `None` when nothing is stored for the key and
/// `Some(RawValue::Null)` when a null is stored. Key namespacing (dot paths,
/// env-var names, ...) is entirely the source's business.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a registry can be shared across
/// threads.
///
/// # Examples
///
/// ```rust
/// use typed_registry::domain::RawValue;
/// use typed_registry::ports::ValueSource;
///
/// struct PortOnly;
///
/// impl ValueSource for PortOnly {
///     fn get(&self, key: &str) -> Option<RawValue> {
///         (key == "port").then(|| RawValue::Int(8080))
///     }
/// }
///
/// assert_eq!(PortOnly.get("port"), Some(RawValue::Int(8080)));
/// assert_eq!(PortOnly.get("host"), None);
/// ```
pub trait ValueSource: Send + Sync {
    /// Returns the raw value stored for `key`, or `None` if there is none.
    fn get(&self, key: &str) -> Option<RawValue>;

    /// A short identifier used in log output.
    fn name(&self) -> &str {
        "anonymous"
    }
}

impl<S: ValueSource + ?Sized> ValueSource for &S {
    fn get(&self, key: &str) -> Option<RawValue> {
        (**self).get(key)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: ValueSource + ?Sized> ValueSource for Box<S> {
    fn get(&self, key: &str) -> Option<RawValue> {
        (**self).get(key)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: ValueSource + ?Sized> ValueSource for Arc<S> {
    fn get(&self, key: &str) -> Option<RawValue> {
        (**self).get(key)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestSource;

    impl ValueSource for TestSource {
        fn get(&self, key: &str) -> Option<RawValue> {
            match key {
                "present" => Some(RawValue::from("value")),
                "null" => Some(RawValue::Null),
                _ => None,
            }
        }

        fn name(&self) -> &str {
            "test-source"
        }
    }

    struct Unnamed;

    impl ValueSource for Unnamed {
        fn get(&self, _key: &str) -> Option<RawValue> {
            None
        }
    }

    #[test]
    fn test_absent_and_null_are_distinct() {
        let source = TestSource;
        assert_eq!(source.get("null"), Some(RawValue::Null));
        assert_eq!(source.get("missing"), None);
    }

    #[test]
    fn test_default_name() {
        assert_eq!(Unnamed.name(), "anonymous");
    }

    #[test]
    fn test_reference_forwarding() {
        let source = TestSource;
        let by_ref = &source;
        assert_eq!(by_ref.get("present"), Some(RawValue::from("value")));
        assert_eq!(by_ref.name(), "test-source");
    }

    #[test]
    fn test_box_and_arc_forwarding() {
        let boxed: Box<dyn ValueSource> = Box::new(TestSource);
        assert_eq!(boxed.name(), "test-source");
        assert_eq!(boxed.get("present"), Some(RawValue::from("value")));

        let shared = Arc::new(TestSource);
        assert_eq!(shared.get("null"), Some(RawValue::Null));
    }

    #[test]
    fn test_value_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn ValueSource>>();
    }
}
