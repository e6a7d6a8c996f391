// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fallback-chain value source.
//!
//! This module provides a source that queries an ordered list of other sources
//! and answers with the first usable value.

use crate::domain::RawValue;
use crate::ports::ValueSource;
use std::fmt;

/// A value source that tries several sources in order.
///
/// `get` returns the first answer that is present and not null. A null from an
/// earlier source is treated like absence, so a later source can fill it in.
/// When no source has a usable value the key is absent.
///
/// # Examples
///
/// ```rust
/// use typed_registry::adapters::{ChainSource, MapSource};
/// use typed_registry::domain::RawValue;
/// use typed_registry::ports::ValueSource;
///
/// let chain = ChainSource::builder()
///     .with_source(MapSource::new().with_value("x", RawValue::Null))
///     .with_source(MapSource::new().with_value("x", 5))
///     .build();
///
/// assert_eq!(chain.get("x"), Some(RawValue::Int(5)));
/// ```
pub struct ChainSource {
    /// Sources in query order (first wins)
    sources: Vec<Box<dyn ValueSource>>,
}

impl ChainSource {
    /// Creates a chain from sources in query order.
    pub fn new(sources: Vec<Box<dyn ValueSource>>) -> Self {
        Self { sources }
    }

    /// Creates a new chain builder.
    pub fn builder() -> ChainSourceBuilder {
        ChainSourceBuilder::new()
    }

    /// Returns the number of sources in the chain.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` if the chain has no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Returns the names of the sources in query order.
    pub fn names(&self) -> Vec<&str> {
        self.sources.iter().map(|source| source.name()).collect()
    }
}

impl ValueSource for ChainSource {
    fn get(&self, key: &str) -> Option<RawValue> {
        for source in &self.sources {
            match source.get(key) {
                Some(RawValue::Null) => {
                    tracing::trace!(source = source.name(), key, "null value, falling through");
                }
                Some(value) => return Some(value),
                None => {
                    tracing::trace!(source = source.name(), key, "key absent, falling through");
                }
            }
        }
        None
    }

    fn name(&self) -> &str {
        "chain"
    }
}

impl fmt::Debug for ChainSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainSource")
            .field("sources", &self.names())
            .finish()
    }
}

/// Builder for constructing a `ChainSource`.
///
/// Sources are queried in the order they were added.
#[derive(Default)]
pub struct ChainSourceBuilder {
    sources: Vec<Box<dyn ValueSource>>,
}

impl ChainSourceBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source to the end of the chain.
    pub fn with_source(mut self, source: impl ValueSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Appends an already boxed source to the end of the chain.
    pub fn with_boxed_source(mut self, source: Box<dyn ValueSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Appends the process environment as a source.
    #[cfg(feature = "env")]
    pub fn with_env_vars(self) -> Self {
        use crate::adapters::EnvVarSource;
        self.with_source(EnvVarSource::new().lowercase_keys(true))
    }

    /// Appends environment variables with the given prefix as a source.
    #[cfg(feature = "env")]
    pub fn with_env_prefix(self, prefix: impl Into<String>) -> Self {
        use crate::adapters::EnvVarSource;
        self.with_source(EnvVarSource::with_prefix(prefix).lowercase_keys(true))
    }

    /// Appends a YAML file as a source.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use typed_registry::adapters::ChainSource;
    ///
    /// # fn main() -> Result<(), typed_registry::domain::SourceError> {
    /// let chain = ChainSource::builder()
    ///     .with_yaml_file("/etc/myapp/config.yaml")?
    ///     .build();
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "yaml")]
    pub fn with_yaml_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, crate::domain::SourceError> {
        use crate::adapters::YamlFileSource;
        let source = YamlFileSource::from_file(path)?;
        Ok(self.with_source(source))
    }

    /// Builds the chain.
    pub fn build(self) -> ChainSource {
        ChainSource::new(self.sources)
    }
}
