//! Immutable JSON values with equality and hashing that follow JSON semantics.
//!
//! - Numbers are equal when they denote the same value, no matter whether they are stored as
//!   `i64`, `u64` or `f64`. Equal numbers hash the same.
//! - Objects compare without regard to key order; arrays are ordered.
//! - [`JsonValue::IfPresent`] marks an optional slot. An absent slot is different from `null`,
//!   and any number of wrapping layers around the same content compare and hash equal.
//!
//! ```
//! use jsonvalue::{JsonValue, Number};
//!
//! let integer = JsonValue::Number(Number::Integer(5));
//! let float = JsonValue::Number(Number::FloatingPoint(5.0));
//! assert_eq!(integer, float);
//!
//! let wrapped = JsonValue::if_present(Some(JsonValue::if_present(Some(integer.clone()))));
//! assert_eq!(wrapped, integer);
//! assert_ne!(JsonValue::absent(), JsonValue::Null);
//! ```
#[cfg(feature = "serde_json")]
mod error;
mod impls;
mod value;

#[cfg(feature = "serde_json")]
pub use error::ConversionError;
pub use value::{JsonValue, Number, Object};
