// SPDX-License-Identifier: MIT OR Apache-2.0

//! Function-backed value source.

use crate::domain::RawValue;
use crate::ports::ValueSource;
use std::fmt;

/// A value source that defers every lookup to a closure.
///
/// All semantics, including absence, belong to the wrapped function.
///
/// # Examples
///
/// ```rust
/// use typed_registry::adapters::CallbackSource;
/// use typed_registry::domain::RawValue;
/// use typed_registry::ports::ValueSource;
///
/// let source = CallbackSource::new(|key: &str| {
///     key.strip_prefix("echo.").map(RawValue::from)
/// });
/// assert_eq!(source.get("echo.hi"), Some(RawValue::from("hi")));
/// assert_eq!(source.get("hi"), None);
/// ```
pub struct CallbackSource<F> {
    callback: F,
}

impl<F> CallbackSource<F>
where
    F: Fn(&str) -> Option<RawValue> + Send + Sync,
{
    /// Wraps `callback` as a value source.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> ValueSource for CallbackSource<F>
where
    F: Fn(&str) -> Option<RawValue> + Send + Sync,
{
    fn get(&self, key: &str) -> Option<RawValue> {
        (self.callback)(key)
    }

    fn name(&self) -> &str {
        "callback"
    }
}

impl<F> fmt::Debug for CallbackSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSource").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_callback_source_name() {
        let source = CallbackSource::new(|_: &str| None);
        assert_eq!(source.name(), "callback");
    }

    #[test]
    fn test_callback_source_delegates() {
        let source = CallbackSource::new(|key: &str| match key {
            "answer" => Some(RawValue::Int(42)),
            "nothing" => Some(RawValue::Null),
            _ => None,
        });
        assert_eq!(source.get("answer"), Some(RawValue::Int(42)));
        assert_eq!(source.get("nothing"), Some(RawValue::Null));
        assert_eq!(source.get("other"), None);
    }

    #[test]
    fn test_callback_source_called_once_per_get() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let source = CallbackSource::new(move |_: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
            None
        });

        source.get("a");
        source.get("b");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_callback_source_debug() {
        let source = CallbackSource::new(|_: &str| None);
        assert_eq!(format!("{:?}", source), "CallbackSource { .. }");
    }
}
