//! # numerus-vector
//!
//! Real vectors whose dimension is checked at runtime.
//!
//! This crate provides:
//! - [`Vector`], an ordered sequence of `f64` components
//! - Checked component-wise addition and subtraction, dot product
//! - Scalar multiplication (`v * k`)
//! - Text formatting (`"[1, 2, 3]"`) and lenient single-pass parsing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod vector;

#[cfg(test)]
mod proptests;

pub use error::VectorError;
pub use vector::Vector;
