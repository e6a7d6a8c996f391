// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the typed registry.
//!
//! The registry is the only place where raw values are validated against the
//! requested types.

pub mod typed_registry;

// Re-export commonly used types
pub use typed_registry::TypedRegistry;
