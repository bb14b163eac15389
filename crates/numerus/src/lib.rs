//! # Numerus
//!
//! Exact fractions and real vectors.
//!
//! ## Features
//!
//! - **Fractions**: `i64` rationals always kept in lowest terms, with a
//!   positive denominator and checked division
//! - **Vectors**: `f64` vectors with runtime dimension checks, scaling and
//!   dot product
//! - **Text**: `"3/4"` and `"[1, 2, 3]"` formatting with single-pass parsers
//!
//! ## Quick Start
//!
//! ```rust
//! use numerus::prelude::*;
//!
//! let half: Fraction = "1/2".parse()?;
//! let third = Fraction::new(1, 3)?;
//! assert_eq!((half + third).to_string(), "5/6");
//!
//! let v = Vector::from([1.0, 2.0, 3.0]);
//! let w: Vector = "[4, 5, 6]".parse()?;
//! assert_eq!(v.dot(&w)?, 32.0);
//! # Ok::<(), numerus::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;


pub use error::Error;

pub use numerus_fraction as fraction;
pub use numerus_vector as vector;

pub use numerus_fraction::{Fraction, FractionError};
pub use numerus_vector::{Vector, VectorError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Error;
    pub use numerus_fraction::{Fraction, FractionError};
    pub use numerus_vector::{Vector, VectorError};
}
