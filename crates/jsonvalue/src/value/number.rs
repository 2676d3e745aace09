#![allow(clippy::float_cmp)]

use core::fmt;
use std::hash::{Hash, Hasher};

use num_traits::ToPrimitive;

/// A JSON number, kept in the representation it was constructed with.
///
/// Equality and hashing ignore the representation and look only at the mathematical value:
/// `Integer(5)`, `UnsignedInteger(5)` and `FloatingPoint(5.0)` are equal and hash the same.
/// Integers and floats are compared exactly, without any tolerance, so a float is equal to an
/// integer only if it has no fractional part and lies inside the range of that integer type.
#[derive(Debug, Copy, Clone)]
pub enum Number {
    Integer(i64),
    UnsignedInteger(u64),
    FloatingPoint(f64),
}

/// Comparison domain shared by `PartialEq` and `Hash` for [`Number`].
#[derive(Debug, Copy, Clone)]
enum Canonical {
    /// A value in `i64::MIN..=u64::MAX` with no fractional part. Zero is never negative.
    Integral { negative: bool, magnitude: u64 },
    /// Anything without an exact 64-bit integer counterpart.
    Float(f64),
}

impl Canonical {
    #[inline]
    fn from_signed(value: i64) -> Self {
        Canonical::Integral {
            negative: value < 0,
            magnitude: value.unsigned_abs(),
        }
    }

    #[inline]
    fn from_unsigned(value: u64) -> Self {
        Canonical::Integral {
            negative: false,
            magnitude: value,
        }
    }

    fn from_float(value: f64) -> Self {
        // `fract` is NaN for NaN and infinities
        if value.fract() == 0.0 {
            // Range-checked: `2^64` and anything below `-2^63` stay floats
            if let Some(magnitude) = value.to_u64() {
                return Canonical::from_unsigned(magnitude);
            }
            if let Some(signed) = value.to_i64() {
                return Canonical::from_signed(signed);
            }
        }
        Canonical::Float(value)
    }
}

impl PartialEq for Canonical {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Canonical::Integral {
                    negative: ln,
                    magnitude: lm,
                },
                Canonical::Integral {
                    negative: rn,
                    magnitude: rm,
                },
            ) => ln == rn && lm == rm,
            (Canonical::Float(l), Canonical::Float(r)) => l == r,
            _ => false,
        }
    }
}

impl Hash for Canonical {
    fn hash<H: Hasher>(&self, h: &mut H) {
        match *self {
            Canonical::Integral {
                negative,
                magnitude,
            } => {
                h.write_u8(0);
                negative.hash(h);
                magnitude.hash(h);
            }
            Canonical::Float(f) => {
                // Signed zeros are integral and never reach this branch
                h.write_u8(1);
                f.to_bits().hash(h);
            }
        }
    }
}

impl Number {
    #[inline]
    fn canonical(self) -> Canonical {
        match self {
            Number::Integer(i) => Canonical::from_signed(i),
            Number::UnsignedInteger(u) => Canonical::from_unsigned(u),
            Number::FloatingPoint(f) => Canonical::from_float(f),
        }
    }

    /// Returns the value as `i64` if it can be represented exactly.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Integer(i) => Some(i),
            Number::UnsignedInteger(u) => i64::try_from(u).ok(),
            Number::FloatingPoint(f) if f.fract() == 0.0 => f.to_i64(),
            Number::FloatingPoint(_) => None,
        }
    }

    /// Returns the value as `u64` if it can be represented exactly.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::Integer(i) => u64::try_from(i).ok(),
            Number::UnsignedInteger(u) => Some(u),
            Number::FloatingPoint(f) if f.fract() == 0.0 => f.to_u64(),
            Number::FloatingPoint(_) => None,
        }
    }

    /// Returns the nearest `f64`. Large integers may lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(i) => i as f64,
            Number::UnsignedInteger(u) => u as f64,
            Number::FloatingPoint(f) => f,
        }
    }

    /// Decoded non-negative integers are stored as `Integer` whenever they fit.
    #[cfg(any(feature = "serde", feature = "serde_json"))]
    pub(crate) fn from_decoded_u64(value: u64) -> Number {
        i64::try_from(value).map_or(Number::UnsignedInteger(value), Number::Integer)
    }

    /// Whether the value is an integer representable as either `i64` or `u64`.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self.canonical(), Canonical::Integral { .. })
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{n}"),
            Number::UnsignedInteger(n) => write!(f, "{n}"),
            Number::FloatingPoint(n) => write!(f, "{n}"),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::UnsignedInteger(a), Number::UnsignedInteger(b)) => a == b,
            _ => self.canonical() == other.canonical(),
        }
    }
}

// NaN is not equal to itself. Non-finite numbers are not valid JSON and are expected to be
// rejected by whatever builds the value.
impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, h: &mut H) {
        self.canonical().hash(h);
    }
}

macro_rules! impl_from_primitive {
    ($variant:ident($target:ty): $($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                #[inline]
                fn from(value: $ty) -> Self {
                    Number::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

impl_from_primitive!(Integer(i64): i8, i16, i32, i64);
impl_from_primitive!(UnsignedInteger(u64): u8, u16, u32, u64);
impl_from_primitive!(FloatingPoint(f64): f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::RandomState;
    use test_case::test_case;

    fn hash_of(number: Number) -> u64 {
        RandomState::with_seeds(1, 2, 3, 4).hash_one(number)
    }

    #[test_case(Number::Integer(5), Number::UnsignedInteger(5); "integer and unsigned")]
    #[test_case(Number::Integer(5), Number::FloatingPoint(5.0); "integer and float")]
    #[test_case(Number::UnsignedInteger(5), Number::FloatingPoint(5.0); "unsigned and float")]
    #[test_case(Number::Integer(0), Number::FloatingPoint(-0.0); "zero and negative zero")]
    #[test_case(Number::FloatingPoint(0.0), Number::FloatingPoint(-0.0); "signed zeros")]
    #[test_case(Number::Integer(-7), Number::FloatingPoint(-7.0); "negative integer and float")]
    #[test_case(Number::Integer(i64::MIN), Number::FloatingPoint(-9_223_372_036_854_775_808.0); "i64 min is exact")]
    #[test_case(Number::Integer(i64::MAX), Number::UnsignedInteger((1 << 63) - 1); "i64 max and unsigned")]
    #[test_case(Number::UnsignedInteger(1 << 63), Number::FloatingPoint(9_223_372_036_854_775_808.0); "two to the 63")]
    #[test_case(Number::FloatingPoint(1e20), Number::FloatingPoint(1e20); "out of integer range")]
    #[test_case(Number::FloatingPoint(2.5), Number::FloatingPoint(2.5); "fractional")]
    fn equal(lhs: Number, rhs: Number) {
        assert_eq!(lhs, rhs);
        assert_eq!(rhs, lhs);
        assert_eq!(hash_of(lhs), hash_of(rhs));
    }

    #[test_case(Number::Integer(-1), Number::UnsignedInteger(u64::MAX); "negative and unsigned max")]
    #[test_case(Number::Integer(-1), Number::UnsignedInteger(1); "negative and its magnitude")]
    #[test_case(Number::FloatingPoint(5.5), Number::Integer(5); "fractional and integer")]
    #[test_case(Number::FloatingPoint(5.5), Number::UnsignedInteger(5); "fractional and unsigned")]
    #[test_case(Number::UnsignedInteger(u64::MAX), Number::FloatingPoint(18_446_744_073_709_551_616.0); "unsigned max and rounded float")]
    #[test_case(Number::Integer(i64::MAX), Number::FloatingPoint(9_223_372_036_854_775_808.0); "i64 max and rounded float")]
    #[test_case(Number::Integer(i64::MIN), Number::UnsignedInteger(1 << 63); "i64 min and its magnitude")]
    #[test_case(Number::FloatingPoint(f64::NAN), Number::FloatingPoint(f64::NAN); "nan")]
    #[test_case(Number::FloatingPoint(f64::INFINITY), Number::UnsignedInteger(u64::MAX); "infinity")]
    #[test_case(Number::Integer(12345), Number::UnsignedInteger(123_456); "different magnitudes")]
    fn not_equal(lhs: Number, rhs: Number) {
        assert_ne!(lhs, rhs);
        assert_ne!(rhs, lhs);
    }

    #[test_case(Number::Integer(-3), Some(-3), None; "negative")]
    #[test_case(Number::UnsignedInteger(u64::MAX), None, Some(u64::MAX); "unsigned max")]
    #[test_case(Number::FloatingPoint(42.0), Some(42), Some(42); "integral float")]
    #[test_case(Number::FloatingPoint(42.5), None, None; "fractional float")]
    #[test_case(Number::FloatingPoint(-0.0), Some(0), Some(0); "negative zero")]
    fn exact_conversions(number: Number, signed: Option<i64>, unsigned: Option<u64>) {
        assert_eq!(number.as_i64(), signed);
        assert_eq!(number.as_u64(), unsigned);
    }

    #[test]
    fn is_integer() {
        assert!(Number::FloatingPoint(3.0).is_integer());
        assert!(Number::UnsignedInteger(u64::MAX).is_integer());
        assert!(!Number::FloatingPoint(1e20).is_integer());
        assert!(!Number::FloatingPoint(f64::NAN).is_integer());
    }

    #[test_case(Number::Integer(-42), "-42")]
    #[test_case(Number::UnsignedInteger(42), "42")]
    #[test_case(Number::FloatingPoint(1.5), "1.5")]
    fn display(number: Number, expected: &str) {
        assert_eq!(number.to_string(), expected);
    }
}
