// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the value model, the primitive type set and the error
//! types. It depends on nothing but `serde` and `thiserror`.

pub mod errors;
pub mod primitive;
pub mod raw_value;

// Re-export commonly used types
pub use errors::{Result, SourceError, TypeError};
pub use primitive::Primitive;
pub use raw_value::{Opaque, RawValue};
