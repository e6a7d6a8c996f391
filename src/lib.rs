// SPDX-License-Identifier: MIT OR Apache-2.0

//! A strict, non-coercing typed access layer over untyped key-value sources.
//!
//! Values come out of a source with no static type. This crate hands them to the
//! caller as exactly-typed Rust values and refuses every implicit conversion:
//! the string `"123"` is never an integer, and the integer `1` is never a float.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: the value model and errors (`RawValue`, `Primitive`, `TypeError`)
//! - **Ports**: the traits the registry talks through (`ValueSource`, `ValueParser`)
//! - **Adapters**: source implementations (in-memory map, callback, fallback chain,
//!   environment variables, YAML files)
//! - **Service**: the `TypedRegistry` accessor
//!
//! # Retrieval modes
//!
//! For each of `String`, `i64`, `bool` and `f64`:
//!
//! - **strict** (`get_int`): fails on absence, null, or any other type
//! - **nullable** (`get_nullable_int`): absence and null become `None`
//! - **defaulted** (`get_int_or`): never fails, falls back to the given default
//! - **collections** (`get_int_list`, `get_int_map`): all-or-nothing validation
//!
//! Every failure is a [`TypeError`](domain::TypeError) with the message
//! `[typed-registry] key '{key}' must be {expected}, got {actual}`.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML file source (default)
//! - `env`: Enable the environment variable source (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use typed_registry::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let defaults = MapSource::new()
//!     .with_value("port", 8080)
//!     .with_value("hosts", vec!["a", "b"]);
//! let registry = TypedRegistry::new(ChainSource::builder().with_source(defaults).build());
//!
//! let port = registry.get_int("port")?;
//! let hosts = registry.get_string_list("hosts")?;
//! let verbose = registry.get_bool_or("verbose", false);
//!
//! assert_eq!(port, 8080);
//! assert_eq!(hosts, vec!["a", "b"]);
//! assert!(!verbose);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{CallbackSource, ChainSource, MapSource};
    pub use crate::domain::{Opaque, Primitive, RawValue, Result, SourceError, TypeError};
    pub use crate::ports::{ValueParser, ValueSource};
    pub use crate::service::TypedRegistry;

    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarSource;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlFileSource, YamlParser};
}
