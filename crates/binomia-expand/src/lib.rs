//! Binomial expansion for the Binomia visualizer engine.
//!
//! This crate provides:
//! - [`generate_triangle`]: Pascal's triangle up to a given row
//! - [`expand_binomial`]: the ordered terms of (a + b)ⁿ with values and
//!   display expressions
//! - Display helpers producing math-typesetting strings
//! - Data products for presentation layers: chart series, the triangle
//!   view and the 3D coefficient surface
//!
//! Every operation is a pure function of its arguments. Nothing here keeps
//! state between calls, so recomputing on every input change is expected.
//!
//! # Cost
//!
//! - Triangle: O(max_row²) coefficients
//! - Expansion: O(n) terms, O(n²) overall through the coefficient calls

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chart;
pub mod display;
pub mod limits;
pub mod surface;
pub mod term;
pub mod triangle;

#[cfg(test)]
mod proptests;

pub use binomia_integers::{binomial_coefficient, BinomialError, Coefficient, MAX_ORDER};
pub use chart::ChartSeries;
pub use display::{binomial_expression, format_number, term_expression, GENERAL_FORMULA};
pub use limits::EngineLimits;
pub use surface::{
    coefficient_labels, surface_markers, CoefficientSurface, SurfaceLabel, SurfaceMarker,
};
pub use term::{expand_binomial, Expansion, Term};
pub use triangle::{generate_triangle, PascalRow, Triangle, TriangleView};
