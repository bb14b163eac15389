//! Scanner errors.

use thiserror::Error;

/// What the scanner was looking for when it failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
    /// A specific character was required.
    #[error("expected `{0}`")]
    Expected(char),

    /// No numeric token starts at the cursor.
    #[error("expected a number")]
    MissingNumber,

    /// A numeric token was found but could not be represented.
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
}

/// A scan failure together with the byte offset where it happened.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at byte {position}")]
pub struct ScanError {
    kind: ScanErrorKind,
    position: usize,
}

impl ScanError {
    /// Creates an error of the given kind at `position`.
    #[must_use]
    pub fn new(kind: ScanErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// The kind of failure.
    #[must_use]
    pub fn kind(&self) -> &ScanErrorKind {
        &self.kind
    }

    /// Byte offset into the scanned text.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}
