//! Vector errors.

use numerus_scan::ScanError;
use thiserror::Error;

/// Errors produced by [`Vector`](crate::Vector) arithmetic and parsing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VectorError {
    /// A binary operation received operands of different dimensions.
    #[error("vectors must have the same dimension (got {left} and {right})")]
    DimensionMismatch {
        /// Dimension of the left operand.
        left: usize,
        /// Dimension of the right operand.
        right: usize,
    },

    /// The text contains no numeric component.
    #[error("cannot parse vector: {0}")]
    Parse(#[from] ScanError),
}
