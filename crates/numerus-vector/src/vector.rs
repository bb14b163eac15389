//! Real vectors with a runtime dimension.

use std::fmt;
use std::ops::{Index, Mul, MulAssign};
use std::str::FromStr;

use log::{debug, trace};
use numerus_scan::Scanner;

use crate::VectorError;

/// An ordered sequence of `f64` components.
///
/// The number of components is the vector's dimension. Binary operations
/// check dimensions at runtime and fail with
/// [`VectorError::DimensionMismatch`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Creates a vector from its components.
    #[must_use]
    pub fn new(components: Vec<f64>) -> Self {
        Self { components }
    }

    /// Returns the components in order.
    #[must_use]
    pub fn components(&self) -> &[f64] {
        &self.components
    }

    /// Replaces all components. The dimension may change.
    pub fn set_components(&mut self, components: Vec<f64>) {
        self.components = components;
    }

    /// Returns the number of components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the vector has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterates over the components.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.components.iter()
    }

    fn check_dimension(&self, rhs: &Self) -> Result<(), VectorError> {
        if self.dimension() == rhs.dimension() {
            Ok(())
        } else {
            debug!(
                "dimension mismatch: {} vs {}",
                self.dimension(),
                rhs.dimension()
            );
            Err(VectorError::DimensionMismatch {
                left: self.dimension(),
                right: rhs.dimension(),
            })
        }
    }

    fn zip_with(&self, rhs: &Self, op: impl Fn(f64, f64) -> f64) -> Result<Self, VectorError> {
        self.check_dimension(rhs)?;
        Ok(self
            .iter()
            .zip(rhs.iter())
            .map(|(a, b)| op(*a, *b))
            .collect())
    }

    /// Component-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, VectorError> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Component-wise difference.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, VectorError> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Adds `rhs` to `self` in place.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ, in
    /// which case `self` is left unchanged.
    pub fn checked_add_assign(&mut self, rhs: &Self) -> Result<(), VectorError> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }

    /// Subtracts `rhs` from `self` in place.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ, in
    /// which case `self` is left unchanged.
    pub fn checked_sub_assign(&mut self, rhs: &Self) -> Result<(), VectorError> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }

    /// Multiplies every component by `k`.
    #[must_use]
    pub fn scale(&self, k: f64) -> Self {
        self.iter().map(|c| c * k).collect()
    }

    /// Multiplies every component by `k` in place.
    pub fn scale_assign(&mut self, k: f64) {
        *self = self.scale(k);
    }

    /// Dot product: sum of pairwise component products.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the dimensions differ.
    pub fn dot(&self, rhs: &Self) -> Result<f64, VectorError> {
        self.check_dimension(rhs)?;
        Ok(self
            .iter()
            .zip(rhs.iter())
            .fold(0.0, |acc, (a, b)| acc + a * b))
    }

    /// Parses a vector from the start of `text` and returns the unread
    /// remainder.
    ///
    /// The opening `[` is optional. Numbers are read one after another, each
    /// optionally followed by `,`; reading stops at `]` (which is consumed) or
    /// at the first thing that is not a number. A missing `]` is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Parse`] if no number can be read at all, unless
    /// the text is the empty vector `[]`.
    pub fn parse_prefix(text: &str) -> Result<(Self, &str), VectorError> {
        let mut scanner = Scanner::new(text);
        scanner.skip_whitespace();
        let bracketed = scanner.eat(b'[');
        let mut components = Vec::new();

        loop {
            match scanner.float() {
                Ok(value) => components.push(value),
                Err(_) if !components.is_empty() => break,
                Err(e) => {
                    if bracketed && scanner.expect(b']').is_ok() {
                        return Ok((Self::default(), scanner.rest()));
                    }

                    return Err(e.into());
                }
            }

            scanner.eat(b',');

            if scanner.eat(b']') {
                break;
            }
        }

        trace!(
            "parsed {} components, stopped at byte {}",
            components.len(),
            scanner.position()
        );
        Ok((Self::new(components), scanner.rest()))
    }
}

impl fmt::Display for Vector {
    /// Writes `[c0, c1, ...]`. A precision such as `{:.2}` applies to every
    /// component.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        for (i, c) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            match f.precision() {
                Some(p) => write!(f, "{c:.p$}")?,
                None => write!(f, "{c}")?,
            }
        }

        f.write_str("]")
    }
}

impl FromStr for Vector {
    type Err = VectorError;

    /// Parses the leading vector of `s`; anything after it is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_prefix(s)
            .map(|(vector, _)| vector)
            .map_err(|e| {
                debug!("cannot parse vector from {s:?}: {e}");
                e
            })
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, k: f64) -> Self::Output {
        self.scale(k)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, k: f64) -> Self::Output {
        self.scale(k)
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, k: f64) {
        self.scale_assign(k);
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self::new(components)
    }
}

impl From<&[f64]> for Vector {
    fn from(components: &[f64]) -> Self {
        Self::new(components.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self::new(components.to_vec())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
