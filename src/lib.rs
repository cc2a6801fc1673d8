//! Exact rational arithmetic on fixed-width 32-bit integers.
//!
//! This library provides [`Rational`], a reduced numerator/denominator pair of
//! `i32` values that behaves as a first-class number: arithmetic, total
//! ordering, and mixed comparison against native integer and floating-point
//! values, without the rounding error of a floating-point representation.
//!
//! # Features
//!
//! - **Always canonical**: every constructor and operation returns a fully
//!   reduced value with the sign carried by the numerator
//! - **Overflow-resistant**: multiplication and addition cross-reduce before
//!   multiplying, so products whose reduced form fits 32 bits stay exact even
//!   when the naive cross products would not
//! - **Cross-type comparison**: ordering and equality against `i32`, `i64`,
//!   `f32`, and `f64`, with NaN and rounding-noise handling
//! - **Fallible, not panicking**: zero denominators and reciprocals of zero
//!   surface as [`RationalError::DivisionByZero`] results
//!
//! # Design Philosophy
//!
//! The type is bounded by the 32-bit width: there is no arbitrary-precision
//! fallback, and a result whose *reduced* form still exceeds 32 bits wraps the
//! way fixed-width integer arithmetic does. Intermediate products are computed
//! in 64 bits and cross-reduced first, so this only happens for genuinely
//! unrepresentable results — and even then the returned value is re-reduced,
//! so the canonical-form invariants hold for every live value.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use fixed_ratio::Rational;
//!
//! // Constructions are canonicalized immediately
//! let r = Rational::new(48, -72).unwrap();
//! assert_eq!(r.numerator(), -2);
//! assert_eq!(r.denominator(), 3);
//!
//! // Addition finds the least common denominator
//! let a = Rational::new(1, 2).unwrap();
//! let b = Rational::new(3, 7).unwrap();
//! let sum = a.add(b);
//! assert_eq!((sum.numerator(), sum.denominator()), (13, 14));
//! ```
//!
//! ## Mixed Comparison
//!
//! ```
//! use fixed_ratio::Rational;
//!
//! let half = Rational::new(1, 2).unwrap();
//! assert!(half < 1);
//! assert!(half == 0.5f64);
//! assert!(!(half < f64::NAN) && !(half > f64::NAN));
//! ```

pub mod numeric;

pub use crate::numeric::Numeric;

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Error raised by fallible rational operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RationalError {
    /// A zero denominator at construction, the reciprocal of zero, division
    /// by a zero value, or zero raised to a negative power.
    #[error("division by zero")]
    DivisionByZero,
}

/// An exact rational number as a reduced pair of 32-bit integers.
///
/// The type is `Copy`, and all arithmetic takes operands by value.
///
/// # Invariants
///
/// - The denominator is never zero
/// - `gcd(|numerator|, denominator) == 1` (the value is fully reduced)
/// - Zero is always represented as `0/1`
/// - The sign lives in the numerator; the denominator is positive, except
///   when the reduced denominator is `i32::MIN` (negating it would overflow,
///   so the sign flip is skipped and [`Display`](core::fmt::Display) moves
///   the sign textually)
///
/// # Examples
///
/// ```
/// use fixed_ratio::Rational;
///
/// let r = Rational::new(6, 8).unwrap();
/// assert_eq!(r.numerator(), 3);
/// assert_eq!(r.denominator(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rational {
    numer: i32,
    denom: i32,
}

impl Rational {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a rational from a numerator/denominator pair, reducing it to
    /// canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] when `denom` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::Rational;
    ///
    /// let r = Rational::new(48, -72).unwrap();
    /// assert_eq!((r.numerator(), r.denominator()), (-2, 3));
    ///
    /// assert!(Rational::new(1, 0).is_err());
    /// ```
    pub fn new(numer: i32, denom: i32) -> Result<Self, RationalError> {
        if denom == 0 {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::canonical(numer, denom))
    }

    /// Create a whole-number rational `n/1`.
    #[inline(always)]
    pub fn from_integer(n: i32) -> Self {
        Self { numer: n, denom: 1 }
    }

    /// Create a rational representing 0.
    #[inline(always)]
    pub fn zero() -> Self {
        Self { numer: 0, denom: 1 }
    }

    /// Create a rational representing 1.
    #[inline(always)]
    pub fn one() -> Self {
        Self { numer: 1, denom: 1 }
    }

    /// The canonical numerator. Carries the sign of the value.
    #[inline(always)]
    pub fn numerator(&self) -> i32 {
        self.numer
    }

    /// The canonical denominator. Positive except in the `i32::MIN` edge case.
    #[inline(always)]
    pub fn denominator(&self) -> i32 {
        self.denom
    }

    // ========================================================================
    // CANONICALIZATION
    // ========================================================================

    /// Re-establish the canonical-form invariants on a 32-bit pair.
    ///
    /// Divides both parts by their GCD and moves the sign into the numerator.
    /// The sign flip is skipped when the denominator is `i32::MIN`, since
    /// negating it would overflow. A zero denominator can only arrive here
    /// from a wrapped unrepresentable intermediate (constructors reject it
    /// up front); it is forced to 1 to keep operations total.
    fn canonical(numer: i32, denom: i32) -> Self {
        let denom = if denom == 0 { 1 } else { denom };
        if numer == 0 {
            return Self::zero();
        }

        let g = gcd(
            u64::from(numer.unsigned_abs()),
            u64::from(denom.unsigned_abs()),
        ) as i64;
        let mut n = i64::from(numer) / g;
        let mut d = i64::from(denom) / g;

        if d < 0 && d != i64::from(i32::MIN) {
            n = -n;
            d = -d;
        }

        Self {
            numer: n as i32,
            denom: d as i32,
        }
    }

    /// Reduce a 64-bit intermediate pair exactly, then narrow to 32 bits.
    ///
    /// The exact reduction runs in 64 bits so any result whose reduced form
    /// fits the width survives unchanged. Narrowing wraps, and the wrapped
    /// pair goes back through [`canonical`](Rational::canonical) so the
    /// invariants hold even for unrepresentable results.
    fn reduce(numer: i64, denom: i64) -> Self {
        debug_assert!(denom != 0);
        if numer == 0 {
            return Self::zero();
        }

        let g = gcd(numer.unsigned_abs(), denom.unsigned_abs()) as i64;
        Self::canonical((numer / g) as i32, (denom / g) as i32)
    }

    // ========================================================================
    // ARITHMETIC
    // ========================================================================

    /// Negate the rational (the additive inverse).
    #[allow(clippy::should_implement_trait)] // We do implement Neg as well
    #[inline(always)]
    pub fn neg(self) -> Self {
        Self {
            numer: self.numer.wrapping_neg(),
            denom: self.denom,
        }
    }

    /// The multiplicative inverse (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] when the value is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::Rational;
    ///
    /// let r = Rational::new(-2, 3).unwrap();
    /// let inv = r.recip().unwrap();
    /// assert_eq!((inv.numerator(), inv.denominator()), (-3, 2));
    /// ```
    pub fn recip(self) -> Result<Self, RationalError> {
        if self.numer == 0 {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::canonical(self.denom, self.numer))
    }

    /// Multiply two rationals.
    ///
    /// Cross-reduces before multiplying: `(self.numer, other.denom)` and
    /// `(other.numer, self.denom)` are reduced as independent fractions first,
    /// which keeps intermediate products small enough that any result whose
    /// reduced form fits 32 bits is computed exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::Rational;
    ///
    /// // The naive cross products overflow 32 bits; the reduced result is exact
    /// let a = Rational::new(2147483646, 5).unwrap();
    /// let b = Rational::new(50, 49981).unwrap();
    /// let product = a.mul(b);
    /// assert_eq!((product.numerator(), product.denominator()), (429660, 1));
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn mul(self, other: Self) -> Self {
        if self.numer == 0 || other.numer == 0 {
            return Self::zero();
        }

        let left = Self::canonical(self.numer, other.denom);
        let right = Self::canonical(other.numer, self.denom);

        Self::reduce(
            i64::from(left.numer) * i64::from(right.numer),
            i64::from(left.denom) * i64::from(right.denom),
        )
    }

    /// Divide by another rational.
    ///
    /// Equivalent to multiplying by `other.recip()`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] when `other` is zero.
    #[allow(clippy::should_implement_trait)]
    pub fn div(self, other: Self) -> Result<Self, RationalError> {
        Ok(self.mul(other.recip()?))
    }

    /// Add two rationals over their least common denominator.
    ///
    /// Cross-reduces by `gcd` of the numerators and `gcd` of the denominators
    /// to keep intermediate products small before canonicalizing.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        let gn = gcd(
            u64::from(self.numer.unsigned_abs()),
            u64::from(other.numer.unsigned_abs()),
        ) as i64;
        let gd = gcd(
            u64::from(self.denom.unsigned_abs()),
            u64::from(other.denom.unsigned_abs()),
        ) as i64;

        let (a, b) = (i64::from(self.numer), i64::from(self.denom));
        let (c, d) = (i64::from(other.numer), i64::from(other.denom));

        let t = (a / gn) * (d / gd) + (c / gn) * (b / gd);
        Self::reduce(gn * t, b * (d / gd))
    }

    /// Subtract another rational.
    ///
    /// Equivalent to `self.add(other.neg())`.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn sub(self, other: Self) -> Self {
        self.add(other.neg())
    }

    /// Raise to an integer power by square-and-multiply.
    ///
    /// An exponent of 0 yields canonical 1. A negative exponent recurses on
    /// the reciprocal raised to the absolute exponent.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] when the value is zero and
    /// the exponent is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::Rational;
    ///
    /// let r = Rational::new(2, 3).unwrap();
    /// let p = r.pow(-2).unwrap();
    /// assert_eq!((p.numerator(), p.denominator()), (9, 4));
    /// ```
    pub fn pow(self, exponent: i32) -> Result<Self, RationalError> {
        if exponent < 0 {
            return Ok(self.recip()?.pow_abs(exponent.unsigned_abs()));
        }
        Ok(self.pow_abs(exponent as u32))
    }

    fn pow_abs(self, mut exponent: u32) -> Self {
        let mut base = self;
        let mut result = Self::one();
        while exponent > 0 {
            if exponent % 2 == 0 {
                base = base.mul(base);
                exponent /= 2;
            } else {
                result = result.mul(base);
                exponent -= 1;
            }
        }
        result
    }

    // ========================================================================
    // PREDICATES
    // ========================================================================

    /// Check if the rational is zero.
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    /// Check if the rational is one.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.numer == self.denom && self.numer > 0
    }

    /// Check if the rational is minus one.
    #[inline]
    pub fn is_minus_one(&self) -> bool {
        self.numer < 0 && -i64::from(self.numer) == i64::from(self.denom)
    }

    // ========================================================================
    // NUMERIC PROJECTION
    // ========================================================================

    /// Truncating projection to `i32` (toward zero).
    #[inline]
    pub fn to_i32(&self) -> i32 {
        self.numer / self.denom
    }

    /// Truncating projection to `i64` (toward zero).
    #[inline]
    pub fn to_i64(&self) -> i64 {
        i64::from(self.numer) / i64::from(self.denom)
    }

    /// Projection to the nearest representable `f32`.
    #[inline]
    pub fn to_f32(&self) -> f32 {
        self.numer as f32 / self.denom as f32
    }

    /// Projection to the nearest representable `f64`.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        f64::from(self.numer) / f64::from(self.denom)
    }

    // ========================================================================
    // ORDERING
    // ========================================================================

    /// Strict rational-vs-rational less-than.
    ///
    /// Fast path on a numerator sign mismatch; otherwise the sign of the
    /// difference decides.
    fn lt_rational(self, other: Self) -> bool {
        if self.numer < 0 && other.numer >= 0 {
            return true;
        }
        if self.numer >= 0 && other.numer < 0 {
            return false;
        }
        self.sub(other).numer < 0
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Euclidean GCD on absolute values, with `gcd(0, 0) = 1` so callers can
/// always divide by the result.
#[inline]
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    if a == 0 {
        1
    } else {
        a
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

use core::ops::{Add, Mul, Neg, Sub};

impl Default for Rational {
    /// The canonical zero, `0/1`.
    #[inline(always)]
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i32> for Rational {
    #[inline(always)]
    fn from(n: i32) -> Self {
        Self::from_integer(n)
    }
}

impl Add for Rational {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Rational::add(self, other)
    }
}

impl Add for &Rational {
    type Output = Rational;
    #[inline(always)]
    fn add(self, other: Self) -> Rational {
        Rational::add(*self, *other)
    }
}

impl Sub for Rational {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Rational::sub(self, other)
    }
}

impl Sub for &Rational {
    type Output = Rational;
    #[inline(always)]
    fn sub(self, other: Self) -> Rational {
        Rational::sub(*self, *other)
    }
}

impl Mul for Rational {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Rational::mul(self, other)
    }
}

impl Mul for &Rational {
    type Output = Rational;
    #[inline(always)]
    fn mul(self, other: Self) -> Rational {
        Rational::mul(*self, *other)
    }
}

impl Neg for Rational {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Rational::neg(self)
    }
}

impl Neg for &Rational {
    type Output = Rational;
    #[inline(always)]
    fn neg(self) -> Rational {
        Rational::neg(*self)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.lt_rational(*other) {
            Ordering::Less
        } else if other.lt_rational(*self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Hashes the canonical display string, so equal canonical values always
/// hash identically. Epsilon-tolerant float comparisons play no part here.
impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

/// The canonical display string: `"26"` for whole numbers, `"-2/3"`
/// otherwise, sign folded into the numerator.
///
/// A negative denominator only survives reduction when it is `i32::MIN`;
/// negating it overflows, so the sign is moved into the string textually.
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom == 1 {
            write!(f, "{}", self.numer)
        } else if self.denom < 0 {
            let d = self.denom.to_string();
            if self.numer < 0 {
                let n = self.numer.to_string();
                write!(f, "{}/{}", &n[1..], &d[1..])
            } else {
                write!(f, "-{}/{}", self.numer, &d[1..])
            }
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl num_traits::Zero for Rational {
    #[inline(always)]
    fn zero() -> Self {
        Rational::zero()
    }

    #[inline(always)]
    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl num_traits::One for Rational {
    #[inline(always)]
    fn one() -> Self {
        Rational::one()
    }
}
