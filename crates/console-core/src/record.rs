//! The record model shared by every listing.
//!
//! A listing never looks inside its items directly. It asks each item for a
//! field by key and gets back a [`FieldValue`]: text, a number, or something
//! that is neither and therefore never matches a search.
//!
//! # Example
//!
//! ```rust
//! use console_core::{FieldValue, Record, RecordId};
//!
//! struct Service {
//!     id: u32,
//!     name: String,
//! }
//!
//! enum ServiceField {
//!     Name,
//! }
//!
//! impl Record for Service {
//!     type Key = ServiceField;
//!
//!     fn id(&self) -> RecordId {
//!         RecordId::from(self.id)
//!     }
//!
//!     fn field(&self, key: &ServiceField) -> Option<FieldValue<'_>> {
//!         match key {
//!             ServiceField::Name => Some(FieldValue::Text(&self.name)),
//!         }
//!     }
//! }
//!
//! let svc = Service { id: 1, name: "Payments".into() };
//! assert_eq!(svc.field(&ServiceField::Name), Some(FieldValue::Text("Payments")));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// An item that can be listed, searched, and filtered by category.
///
/// `Key` names the addressable fields of the record. Typed records use a
/// field enum; untyped records (see [`crate::JsonRecord`]) use strings.
pub trait Record {
    /// Field selector type.
    type Key;

    /// Identifier used as the stable key when rendering.
    fn id(&self) -> RecordId;

    /// Returns the value stored under `key`, or `None` when the record has
    /// no such field.
    fn field(&self, key: &Self::Key) -> Option<FieldValue<'_>>;
}

impl<R: Record + ?Sized> Record for &R {
    type Key = R::Key;

    fn id(&self) -> RecordId {
        (**self).id()
    }

    fn field(&self, key: &Self::Key) -> Option<FieldValue<'_>> {
        (**self).field(key)
    }
}

// ============================================================================
// FieldValue
// ============================================================================

/// A borrowed view of one record field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Textual value.
    Text(&'a str),
    /// Numeric value.
    Number(Number),
    /// Present, but neither text nor a number (booleans, lists, nested maps).
    Other,
}

impl<'a> FieldValue<'a> {
    /// Returns the text if this is a textual value.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(s: &'a str) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Number> for FieldValue<'_> {
    fn from(n: Number) -> Self {
        FieldValue::Number(n)
    }
}

// ============================================================================
// Number
// ============================================================================

/// A numeric field value.
///
/// Display follows the dashboard's conventions: integers print without a
/// fraction, floats print their shortest round-trip form, and a float with
/// no fractional part prints like an integer (`12.0` → `12`). Floats with a
/// magnitude of at least `1e21` or below `1e-6` use exponent form with an
/// explicit sign (`1e+21`, `1e-7`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integral value.
    Integer(i128),
    /// Floating-point value.
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Integer(i) => write!(f, "{i}"),
            Number::Float(x) if x.is_nan() => f.write_str("NaN"),
            Number::Float(x) if x.is_infinite() => {
                f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0.0 renders as "0"
            Number::Float(x) if x == 0.0 => f.write_str("0"),
            Number::Float(x) if x.abs() >= 1e21 || x.abs() < 1e-6 => {
                let sci = format!("{x:e}");
                match sci.split_once('e') {
                    Some((mantissa, exp)) if !exp.starts_with('-') => {
                        write!(f, "{mantissa}e+{exp}")
                    }
                    _ => f.write_str(&sci),
                }
            }
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(v: $t) -> Self {
                    Number::Integer(i128::from(v))
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(f64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl From<&serde_json::Number> for Number {
    fn from(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Number::Integer(i128::from(i))
        } else if let Some(u) = n.as_u64() {
            Number::Integer(i128::from(u))
        } else {
            Number::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

// ============================================================================
// RecordId
// ============================================================================

/// Identifier of a record within one list.
///
/// Uniqueness is the caller's concern; nothing in the listing relies on it
/// beyond using the id as a render key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric identifier (`id: 1`).
    Number(i64),
    /// Textual identifier (`id: "svc1"`).
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u32> for RecordId {
    fn from(n: u32) -> Self {
        RecordId::Number(i64::from(n))
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Text(s)
    }
}

// ============================================================================
// Tests
// ============================================================================
