// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the traits that define how the typed registry talks to
//! the outside world. They are implemented by the adapters layer.

pub mod parser;
pub mod source;

// Re-export commonly used types
pub use parser::ValueParser;
pub use source::ValueSource;
