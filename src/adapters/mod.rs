// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing value source implementations.
//!
//! Each adapter implements the `ValueSource` trait from the ports layer. The
//! in-memory, callback and chain sources are always available; the
//! environment and YAML sources are behind feature flags.

pub mod callback;
pub mod chain;
#[cfg(feature = "env")]
pub mod env_var;
pub mod map_source;
#[cfg(feature = "yaml")]
pub mod yaml_file;

pub use callback::CallbackSource;
pub use chain::{ChainSource, ChainSourceBuilder};
#[cfg(feature = "env")]
pub use env_var::EnvVarSource;
pub use map_source::MapSource;
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlFileSource, YamlParser};
