//! Cross-type comparison between [`Rational`] and native numeric values.
//!
//! Ordering and equality against native numbers go through a small set of
//! `PartialOrd`/`PartialEq` impls plus the [`Numeric`] tagged union, which
//! dispatches by matching the comparand kind:
//!
//! - **Integers** (`i32`, `i64`): the truncated projections are compared
//!   first; a tie is broken by the `f64` projection, which still carries the
//!   sub-integer remainder.
//! - **Floats** (`f32`, `f64`): a NaN comparand is unordered (every ordering
//!   test is false). Otherwise an absolute difference below
//!   [`FLOAT_EQ_TOLERANCE`] counts as equal, absorbing the rounding noise the
//!   projection itself introduces.
//!
//! # Examples
//!
//! ```
//! use fixed_ratio::{Numeric, Rational};
//! use std::cmp::Ordering;
//!
//! let half = Rational::new(1, 2).unwrap();
//! assert!(half.less_than(Some(&Numeric::Int(1))));
//! assert_eq!(half.compare(Some(&Numeric::Double(0.5))), Ordering::Equal);
//!
//! // NaN and missing comparands sort before everything
//! assert_eq!(half.compare(Some(&Numeric::Double(f64::NAN))), Ordering::Less);
//! assert_eq!(half.compare(None), Ordering::Less);
//! ```

use core::cmp::Ordering;

use crate::Rational;

/// Equality tolerance for float comparisons: one ULP of `1.0` at f32 width.
///
/// Applied to both float widths; a 32-bit fraction projected through floating
/// point carries at most this much noise relative to the comparand.
pub const FLOAT_EQ_TOLERANCE: f64 = f32::EPSILON as f64;

/// A native numeric comparand for [`Rational`] comparisons.
///
/// One tag per supported kind; comparison dispatches by matching the tag,
/// never by runtime type inspection.
#[derive(Clone, Copy, Debug)]
pub enum Numeric {
    /// An exact rational value.
    Rational(Rational),
    /// A 32-bit signed integer.
    Int(i32),
    /// A 64-bit signed integer.
    Long(i64),
    /// A 32-bit floating-point value.
    Float(f32),
    /// A 64-bit floating-point value.
    Double(f64),
}

impl From<Rational> for Numeric {
    #[inline(always)]
    fn from(value: Rational) -> Self {
        Self::Rational(value)
    }
}

impl From<i32> for Numeric {
    #[inline(always)]
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for Numeric {
    #[inline(always)]
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f32> for Numeric {
    #[inline(always)]
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for Numeric {
    #[inline(always)]
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

// ============================================================================
// RATIONAL VS NATIVE INTEGERS
// ============================================================================

impl PartialOrd<i64> for Rational {
    /// Compares truncated integer projections; ties are broken by the `f64`
    /// projection, which still sees the sub-integer remainder.
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        let truncated = self.to_i64();
        if truncated != *other {
            return truncated.partial_cmp(other);
        }
        self.to_f64().partial_cmp(&(*other as f64))
    }
}

impl PartialEq<i64> for Rational {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<i32> for Rational {
    #[inline]
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        self.partial_cmp(&i64::from(*other))
    }
}

impl PartialEq<i32> for Rational {
    #[inline]
    fn eq(&self, other: &i32) -> bool {
        *self == i64::from(*other)
    }
}

// ============================================================================
// RATIONAL VS NATIVE FLOATS
// ============================================================================

impl PartialOrd<f64> for Rational {
    /// NaN is unordered. Differences below [`FLOAT_EQ_TOLERANCE`] are equal.
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        if other.is_nan() {
            return None;
        }
        let projected = self.to_f64();
        if (projected - other).abs() < FLOAT_EQ_TOLERANCE {
            return Some(Ordering::Equal);
        }
        projected.partial_cmp(other)
    }
}

impl PartialEq<f64> for Rational {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<f32> for Rational {
    /// NaN is unordered. Differences below one ULP of `1.0f32` are equal.
    fn partial_cmp(&self, other: &f32) -> Option<Ordering> {
        if other.is_nan() {
            return None;
        }
        let projected = self.to_f32();
        if (projected - other).abs() < f32::EPSILON {
            return Some(Ordering::Equal);
        }
        projected.partial_cmp(other)
    }
}

impl PartialEq<f32> for Rational {
    #[inline]
    fn eq(&self, other: &f32) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

// ============================================================================
// RATIONAL VS NUMERIC
// ============================================================================

impl PartialEq<Numeric> for Rational {
    /// Rational comparands use exact canonical equality; native comparands
    /// inherit the ordering rules above (and so the float tolerance).
    fn eq(&self, other: &Numeric) -> bool {
        match *other {
            Numeric::Rational(r) => *self == r,
            _ => self.partial_cmp(other) == Some(Ordering::Equal),
        }
    }
}

impl PartialOrd<Numeric> for Rational {
    fn partial_cmp(&self, other: &Numeric) -> Option<Ordering> {
        match *other {
            Numeric::Rational(r) => self.partial_cmp(&r),
            Numeric::Int(n) => self.partial_cmp(&n),
            Numeric::Long(n) => self.partial_cmp(&n),
            Numeric::Float(x) => self.partial_cmp(&x),
            Numeric::Double(x) => self.partial_cmp(&x),
        }
    }
}

impl Rational {
    /// Strict less-than against an optional comparand.
    ///
    /// A missing comparand and a NaN comparand both yield `false`.
    pub fn less_than(&self, other: Option<&Numeric>) -> bool {
        other.is_some_and(|o| self.partial_cmp(o) == Some(Ordering::Less))
    }

    /// Strict greater-than against an optional comparand.
    ///
    /// A missing comparand and a NaN comparand both yield `false`.
    pub fn greater_than(&self, other: Option<&Numeric>) -> bool {
        other.is_some_and(|o| self.partial_cmp(o) == Some(Ordering::Greater))
    }

    /// Equality against an optional comparand.
    ///
    /// Rational comparands are tested for exact canonical equality; float
    /// comparands inherit the epsilon tolerance. A missing or NaN comparand
    /// is never equal.
    pub fn eq_numeric(&self, other: Option<&Numeric>) -> bool {
        other.is_some_and(|o| self == o)
    }

    /// Total comparison against an optional comparand.
    ///
    /// NaN and missing comparands are unordered but sort before everything,
    /// so both yield [`Ordering::Less`].
    pub fn compare(&self, other: Option<&Numeric>) -> Ordering {
        match other {
            None => Ordering::Less,
            Some(o) => self.partial_cmp(o).unwrap_or(Ordering::Less),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(numer: i32, denom: i32) -> Rational {
        Rational::new(numer, denom).unwrap()
    }

    #[test]
    fn test_rational_comparand() {
        let half = r(1, 2);
        assert!(half.less_than(Some(&Numeric::Rational(r(2, 3)))));
        assert!(half.greater_than(Some(&Numeric::Rational(r(1, 3)))));
        assert!(half.eq_numeric(Some(&Numeric::Rational(r(2, 4)))));
    }

    #[test]
    fn test_rational_equality_is_exact() {
        // Distinct canonical values must never compare equal, even when the
        // difference used for ordering is unrepresentable in 32 bits (here
        // its exact numerator is a multiple of 2^32 and narrows to zero).
        let a = r(2147483647, 1);
        let b = r(1, 2147483647);
        assert!(a != Numeric::Rational(b));
        assert!(!a.eq_numeric(Some(&Numeric::Rational(b))));
        assert!(a.eq_numeric(Some(&Numeric::Rational(r(2147483647, 1)))));
    }

    #[test]
    fn test_integer_comparisons() {
        assert!(r(1, 2) < 1);
        assert!(r(1, 2) > 0);
        assert!(r(-1, 2) < 0);
        assert!(r(3, 1) == 3);
        assert!(r(3, 1) == 3i64);

        // Equal truncations, broken by the fractional remainder
        assert!(r(7, 2) > 3);
        assert!(r(7, 2) < 4);
        assert!(r(-7, 2) < -3i64);
    }

    #[test]
    fn test_float_comparisons() {
        assert!(r(1, 2) == 0.5f64);
        assert!(r(1, 2) == 0.5f32);
        assert!(r(1, 3) < 0.5f64);
        assert!(r(3, 2) > 1.0f64);
        assert!(r(1, 2) < f64::INFINITY);
        assert!(r(1, 2) > f64::NEG_INFINITY);
    }

    #[test]
    fn test_epsilon_absorbs_projection_noise() {
        let one = Rational::one();
        assert_eq!(
            one.compare(Some(&Numeric::Double(0.99999999999998))),
            Ordering::Equal
        );
        assert!(one == 0.99999999999998f64);
        assert!(!one.less_than(Some(&Numeric::Double(0.99999999999998))));

        // Well outside the tolerance, ordering is strict
        assert_eq!(
            one.compare(Some(&Numeric::Double(0.9999))),
            Ordering::Greater
        );
    }

    #[test]
    fn test_nan_is_unordered() {
        let half = r(1, 2);
        for nan in [Numeric::Float(f32::NAN), Numeric::Double(f64::NAN)] {
            assert!(!half.less_than(Some(&nan)));
            assert!(!half.greater_than(Some(&nan)));
            assert!(!half.eq_numeric(Some(&nan)));
            assert_eq!(half.compare(Some(&nan)), Ordering::Less);
        }
    }

    #[test]
    fn test_missing_comparand() {
        let half = r(1, 2);
        assert!(!half.less_than(None));
        assert!(!half.greater_than(None));
        assert!(!half.eq_numeric(None));
        assert_eq!(half.compare(None), Ordering::Less);
    }

    #[test]
    fn test_compare_matches_strict_orderings() {
        let half = r(1, 2);
        assert_eq!(half.compare(Some(&Numeric::Int(1))), Ordering::Less);
        assert_eq!(half.compare(Some(&Numeric::Int(0))), Ordering::Greater);
        assert_eq!(half.compare(Some(&Numeric::Double(0.5))), Ordering::Equal);
        assert_eq!(half.compare(Some(&Numeric::Long(-4))), Ordering::Greater);
    }

    #[test]
    fn test_numeric_from_impls() {
        assert!(matches!(Numeric::from(r(1, 2)), Numeric::Rational(_)));
        assert!(matches!(Numeric::from(5i32), Numeric::Int(5)));
        assert!(matches!(Numeric::from(5i64), Numeric::Long(5)));
        assert!(matches!(Numeric::from(0.5f32), Numeric::Float(_)));
        assert!(matches!(Numeric::from(0.5f64), Numeric::Double(_)));
    }
}
