// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document parser trait definition.
//!
//! This module defines the `ValueParser` trait, which turns the text of a
//! configuration document (YAML, JSON, ...) into a `RawValue` tree for a
//! document-backed source.

use crate::domain::{RawValue, SourceError};

/// A trait for parsing documents into raw values.
///
/// Parsers must preserve the document's native types: an integer stays an
/// integer, a sequence stays a list. Stringifying values here would defeat the
/// registry's exactness checks.
///
/// # Examples
///
/// ```rust
/// use typed_registry::domain::{RawValue, SourceError};
/// use typed_registry::ports::ValueParser;
///
/// struct LinesParser;
///
/// impl ValueParser for LinesParser {
///     fn parse(&self, content: &str) -> Result<RawValue, SourceError> {
///         Ok(RawValue::from(content.lines().collect::<Vec<_>>()))
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["txt"]
///     }
/// }
///
/// let parsed = LinesParser.parse("a\nb").unwrap();
/// assert_eq!(parsed, RawValue::from(vec!["a", "b"]));
/// ```
pub trait ValueParser {
    /// Parses document content into a raw value tree.
    ///
    /// # Returns
    ///
    /// * `Ok(RawValue)` - The document root
    /// * `Err(SourceError)` - The content is not a valid document
    fn parse(&self, content: &str) -> Result<RawValue, SourceError>;

    /// Returns the file extensions this parser handles, without the dot.
    fn supported_extensions(&self) -> &[&str];
}
