//! Fixed-width rational numbers.
//!
//! This module provides exact fraction arithmetic over `i64` with automatic
//! reduction to lowest terms.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use log::debug;
use num_traits::{One, Zero};
use numerus_scan::Scanner;

use crate::FractionError;

/// A rational number with `i64` numerator and denominator.
///
/// Fractions are always stored in lowest terms with a positive denominator,
/// so two fractions are equal exactly when their fields are equal. Zero is
/// stored as `0/1`.
///
/// Integer arithmetic is fixed-width: the cross products computed by `+`, `-`,
/// `*` and [`Fraction::checked_div`] can overflow for large operands.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Creates a fraction from numerator and denominator, reduced to lowest
    /// terms.
    ///
    /// Reduction negates both fields when `denominator` is negative, so
    /// inputs whose reduced form needs `-i64::MIN` (such as `i64::MIN / -1`)
    /// overflow like the arithmetic operators do.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::DivisionByZero`] if `denominator` is zero.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, FractionError> {
        if denominator == 0 {
            debug!("rejected fraction {numerator}/0");
            return Err(FractionError::DivisionByZero);
        }

        Ok(Self::reduced(numerator, denominator))
    }

    /// Creates a fraction from an integer (denominator = 1).
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    // `denominator` is non-zero unless a cross product overflowed
    fn reduced(numerator: i64, denominator: i64) -> Self {
        debug_assert_ne!(denominator, 0);
        let mut f = Self {
            numerator,
            denominator,
        };
        f.normalize();
        f
    }

    #[allow(clippy::cast_possible_wrap)]
    fn normalize(&mut self) {
        let g = match gcd(self.numerator.unsigned_abs(), self.denominator.unsigned_abs()) {
            0 => 1,
            g => g,
        };

        // g > i64::MAX only when both fields are i64::MIN; the wrapped
        // divisor is then i64::MIN itself and the result is still 1/1.
        let g = g as i64;
        self.numerator /= g;
        self.denominator /= g;

        if self.denominator < 0 {
            self.numerator = -self.numerator;
            self.denominator = -self.denominator;
        }
    }

    /// Returns the numerator. Carries the sign of the fraction.
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Replaces the numerator and reduces.
    pub fn set_numerator(&mut self, numerator: i64) {
        self.numerator = numerator;
        self.normalize();
    }

    /// Replaces the denominator and reduces.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::DivisionByZero`] if `denominator` is zero, in
    /// which case `self` is left unchanged.
    pub fn set_denominator(&mut self, denominator: i64) -> Result<(), FractionError> {
        if denominator == 0 {
            debug!("rejected zero denominator for {self}");
            return Err(FractionError::DivisionByZero);
        }

        self.denominator = denominator;
        self.normalize();
        Ok(())
    }

    /// Returns true if this fraction is an integer.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Divides `self` by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self, FractionError> {
        if rhs.numerator == 0 {
            debug!("division of {self} by zero");
            return Err(FractionError::DivisionByZero);
        }

        Ok(Self::reduced(
            self.numerator * rhs.denominator,
            self.denominator * rhs.numerator,
        ))
    }

    /// Divides `self` by `rhs` in place.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::DivisionByZero`] if `rhs` is zero, in which
    /// case `self` is left unchanged.
    pub fn checked_div_assign(&mut self, rhs: Self) -> Result<(), FractionError> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::DivisionByZero`] if `self` is zero.
    pub fn checked_recip(self) -> Result<Self, FractionError> {
        Self::one().checked_div(self)
    }

    /// Converts to the nearest `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Parses a fraction from the start of `text` and returns the unread
    /// remainder.
    ///
    /// The accepted form is an integer, `/`, and another integer, each
    /// optionally preceded by whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Parse`] if the tokens are missing or out of
    /// order, or [`FractionError::DivisionByZero`] if the denominator is zero.
    pub fn parse_prefix(text: &str) -> Result<(Self, &str), FractionError> {
        let mut scanner = Scanner::new(text);

        let numerator = scanner.integer::<i64>()?;
        scanner.expect(b'/')?;
        let denominator = scanner.integer::<i64>()?;

        Ok((Self::new(numerator, denominator)?, scanner.rest()))
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }

    a
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::from_integer(1)
    }

    fn is_one(&self) -> bool {
        self.numerator == 1 && self.denominator == 1
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive, so cross-multiplying keeps the order
        let lhs = i128::from(self.numerator) * i128::from(other.denominator);
        let rhs = i128::from(other.numerator) * i128::from(self.denominator);
        lhs.cmp(&rhs)
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Parses the leading fraction of `s`; anything after it is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_prefix(s)
            .map(|(fraction, _)| fraction)
            .map_err(|e| {
                debug!("cannot parse fraction from {s:?}: {e}");
                e
            })
    }
}

// Arithmetic operations
impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::reduced(
            self.numerator * rhs.denominator + rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::reduced(
            self.numerator * rhs.denominator - rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::reduced(
            self.numerator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Add<&Fraction> for Fraction {
    type Output = Self;

    fn add(self, rhs: &Fraction) -> Self::Output {
        self + *rhs
    }
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: Self) -> Self::Output {
        *self + *rhs
    }
}

impl Sub<&Fraction> for Fraction {
    type Output = Self;

    fn sub(self, rhs: &Fraction) -> Self::Output {
        self - *rhs
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Self) -> Self::Output {
        *self - *rhs
    }
}

impl Mul<&Fraction> for Fraction {
    type Output = Self;

    fn mul(self, rhs: &Fraction) -> Self::Output {
        self * *rhs
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Self) -> Self::Output {
        *self * *rhs
    }
}

impl AddAssign for Fraction {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fraction {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fraction {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}

impl From<Fraction> for f64 {
    fn from(f: Fraction) -> Self {
        f.to_f64()
    }
}
