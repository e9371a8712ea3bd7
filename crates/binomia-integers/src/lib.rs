//! # binomia-integers
//!
//! Exact binomial coefficients for the Binomia expansion engine.
//!
//! This crate provides:
//! - [`Coefficient`]: an exact non-negative integer backed by `dashu`
//! - [`binomial_coefficient`]: C(n, k) via the multiplicative formula
//! - [`BinomialError`]: the error type shared by every engine operation
//!
//! ## Precision ceiling
//!
//! Orders above [`MAX_ORDER`] are rejected with
//! [`BinomialError::PrecisionOverflow`]. Coefficients themselves are exact,
//! but every consumer maps them onto `f64` geometry and term values, and
//! 171! is the first factorial that no longer fits in a double.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binomial;
pub mod coefficient;
pub mod error;

#[cfg(test)]
mod proptests;

pub use binomial::{binomial_coefficient, integer_argument, validate_order, MAX_ORDER};
pub use coefficient::Coefficient;
pub use error::BinomialError;
