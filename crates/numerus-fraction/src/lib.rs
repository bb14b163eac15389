//! # numerus-fraction
//!
//! Exact fraction arithmetic over fixed-width integers.
//!
//! This crate provides:
//! - [`Fraction`], an `i64` numerator/denominator pair kept in lowest terms
//!   with a positive denominator
//! - Infallible `+`, `-`, `*` and checked division
//! - Text formatting (`"3/4"`) and single-pass parsing
//!
//! Fixed-width arithmetic can overflow on large cross products; this is not
//! guarded.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod fraction;

#[cfg(test)]
mod proptests;

pub use error::FractionError;
pub use fraction::Fraction;
