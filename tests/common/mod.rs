// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use typed_registry::adapters::MapSource;
use typed_registry::domain::RawValue;
use typed_registry::ports::ValueSource;

/// A source that counts how often it is queried.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct CountingSource {
    inner: MapSource,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl CountingSource {
    /// Wraps a map source.
    pub fn new(inner: MapSource) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `get` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ValueSource for CountingSource {
    fn get(&self, key: &str) -> Option<RawValue> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key)
    }

    fn name(&self) -> &str {
        "counting"
    }
}

/// A source holding one value of every shape.
#[allow(dead_code)]
pub fn fixture_source() -> MapSource {
    let mut limits = HashMap::new();
    limits.insert("cpu".to_string(), 2);
    limits.insert("memory".to_string(), 512);

    MapSource::new()
        .with_value("string", "text")
        .with_value("digits", "8080")
        .with_value("int", 42)
        .with_value("zero", 0)
        .with_value("bool", true)
        .with_value("float", 1.5)
        .with_value("whole_float", 2.0)
        .with_value("null", RawValue::Null)
        .with_value("list", vec!["a", "b", "c"])
        .with_value("empty_list", RawValue::List(Vec::new()))
        .with_value("limits", limits)
}

/// Every key of [`fixture_source`], plus one that is absent.
#[allow(dead_code)]
pub const FIXTURE_KEYS: &[&str] = &[
    "string",
    "digits",
    "int",
    "zero",
    "bool",
    "float",
    "whole_float",
    "null",
    "list",
    "empty_list",
    "limits",
    "absent",
];

/// Installs a test-friendly tracing subscriber once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
