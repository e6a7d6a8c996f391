// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the typed registry.
//!
//! The accessor has exactly one failure mode, [`TypeError`]. Absence and type
//! mismatch are both reported through it. [`SourceError`] only covers building
//! document-backed sources and is never produced while reading values.

use thiserror::Error;

/// A value did not have the exact type the caller asked for.
///
/// Carries the offending key (with an `[index]` suffix for list elements), a
/// short descriptor of the expected type, and a rendering of what was found.
/// The value is immutable once created.
///
/// # Examples
///
/// ```
/// use typed_registry::domain::TypeError;
///
/// let err = TypeError::new("port", "int", "\"8080\"");
/// assert_eq!(
///     err.to_string(),
///     "[typed-registry] key 'port' must be int, got \"8080\""
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("[typed-registry] key '{key}' must be {expected}, got {actual}")]
pub struct TypeError {
    key: String,
    expected: String,
    actual: String,
}

impl TypeError {
    /// Creates a new `TypeError`.
    pub fn new(
        key: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// The key that failed validation, e.g. `hosts` or `hosts[2]`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The expected type descriptor, e.g. `int` or `list<string>`.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The rendered value that was actually found.
    pub fn actual(&self) -> &str {
        &self.actual
    }
}

/// Errors raised while constructing or reloading a document-backed source.
///
/// This enum is marked `#[non_exhaustive]` so new source kinds can add
/// failure modes without breaking callers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// Reading the backing file failed.
    #[error("Source '{source_name}' I/O error: {message}")]
    Io {
        /// The name of the source
        source_name: String,
        /// What was being attempted
        message: String,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// The document could not be parsed.
    #[error("Failed to parse source document: {message}")]
    Parse {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backing file exceeds the size limit.
    #[error("Source file too large: {size} bytes (max {max} bytes)")]
    TooLarge {
        /// Actual size in bytes
        size: u64,
        /// Allowed size in bytes
        max: u64,
    },

    /// No OS configuration directory could be determined.
    #[error("Failed to determine project directories for '{app_name}'")]
    NoProjectDirs {
        /// The application name that was looked up
        app_name: String,
    },
}

/// Result type of accessor operations.
pub type Result<T, E = TypeError> = std::result::Result<T, E>;
