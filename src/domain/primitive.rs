// SPDX-License-Identifier: MIT OR Apache-2.0

//! The closed set of primitive types the registry can hand out.

use crate::domain::RawValue;

mod sealed {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for i64 {}
    impl Sealed for bool {}
    impl Sealed for f64 {}
}

/// A primitive type the typed registry validates against.
///
/// Implemented for `String`, `i64`, `bool` and `f64` only. Extraction is exact:
/// no variant is ever converted into another.
///
/// # Examples
///
/// ```
/// use typed_registry::domain::{Primitive, RawValue};
///
/// assert_eq!(i64::from_raw(RawValue::Int(3)), Ok(3));
/// assert!(i64::from_raw(RawValue::from("3")).is_err());
/// assert!(f64::from_raw(RawValue::Int(3)).is_err());
/// ```
pub trait Primitive: sealed::Sealed + Sized {
    /// Short type descriptor used in error messages.
    const DESCRIPTOR: &'static str;

    /// Takes the value if it has exactly this type, otherwise hands it back.
    fn from_raw(raw: RawValue) -> Result<Self, RawValue>;
}

impl Primitive for String {
    const DESCRIPTOR: &'static str = "string";

    fn from_raw(raw: RawValue) -> Result<Self, RawValue> {
        match raw {
            RawValue::String(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl Primitive for i64 {
    const DESCRIPTOR: &'static str = "int";

    fn from_raw(raw: RawValue) -> Result<Self, RawValue> {
        match raw {
            RawValue::Int(n) => Ok(n),
            other => Err(other),
        }
    }
}

impl Primitive for bool {
    const DESCRIPTOR: &'static str = "bool";

    fn from_raw(raw: RawValue) -> Result<Self, RawValue> {
        match raw {
            RawValue::Bool(b) => Ok(b),
            other => Err(other),
        }
    }
}

impl Primitive for f64 {
    const DESCRIPTOR: &'static str = "float";

    fn from_raw(raw: RawValue) -> Result<Self, RawValue> {
        match raw {
            RawValue::Float(f) => Ok(f),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptors() {
        assert_eq!(String::DESCRIPTOR, "string");
        assert_eq!(i64::DESCRIPTOR, "int");
        assert_eq!(bool::DESCRIPTOR, "bool");
        assert_eq!(f64::DESCRIPTOR, "float");
    }

    #[test]
    fn test_exact_matches() {
        assert_eq!(String::from_raw(RawValue::from("x")), Ok("x".to_string()));
        assert_eq!(i64::from_raw(RawValue::Int(-1)), Ok(-1));
        assert_eq!(bool::from_raw(RawValue::Bool(true)), Ok(true));
        assert_eq!(f64::from_raw(RawValue::Float(0.5)), Ok(0.5));
    }

    #[test]
    fn test_numeric_neighbours_rejected() {
        assert_eq!(f64::from_raw(RawValue::Int(1)), Err(RawValue::Int(1)));
        assert_eq!(i64::from_raw(RawValue::Float(1.0)), Err(RawValue::Float(1.0)));
        assert_eq!(bool::from_raw(RawValue::Int(1)), Err(RawValue::Int(1)));
        assert_eq!(bool::from_raw(RawValue::Float(0.0)), Err(RawValue::Float(0.0)));
    }

    #[test]
    fn test_strings_never_coerced() {
        assert!(i64::from_raw(RawValue::from("123")).is_err());
        assert!(bool::from_raw(RawValue::from("true")).is_err());
        assert!(f64::from_raw(RawValue::from("1.5")).is_err());
        assert!(String::from_raw(RawValue::Int(123)).is_err());
    }

    #[test]
    fn test_null_rejected() {
        assert_eq!(String::from_raw(RawValue::Null), Err(RawValue::Null));
    }
}
