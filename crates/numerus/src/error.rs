//! Unified error type.

use numerus_fraction::FractionError;
use numerus_vector::VectorError;
use thiserror::Error;

/// Any error produced by a fraction or vector operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A fraction operation failed.
    #[error(transparent)]
    Fraction(#[from] FractionError),

    /// A vector operation failed.
    #[error(transparent)]
    Vector(#[from] VectorError),
}

impl Error {
    /// Returns true for a zero denominator or a division by zero.
    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Error::Fraction(FractionError::DivisionByZero))
    }

    /// Returns true if vector operands had different dimensions.
    #[must_use]
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Error::Vector(VectorError::DimensionMismatch { .. }))
    }

    /// Returns true if text could not be parsed.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            Error::Fraction(FractionError::Parse(_)) | Error::Vector(VectorError::Parse(_))
        )
    }
}
