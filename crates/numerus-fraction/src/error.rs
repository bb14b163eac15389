//! Fraction errors.

use numerus_scan::ScanError;
use thiserror::Error;

/// Errors produced by [`Fraction`](crate::Fraction) construction, division
/// and parsing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FractionError {
    /// A zero denominator was supplied, or a fraction was divided by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The text does not have the form `<int>/<int>`.
    #[error("cannot parse fraction: {0}")]
    Parse(#[from] ScanError),
}
