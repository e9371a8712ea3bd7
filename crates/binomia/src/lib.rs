//! # Binomia
//!
//! The computational core of an interactive binomial theorem visualizer.
//!
//! Binomia computes everything the visual layers draw for (a + b)ⁿ and
//! leaves the drawing to them.
//!
//! ## Features
//!
//! - **Exact Coefficients**: C(n, k) as big integers up to n = 170
//! - **Pascal's Triangle**: bounded rows for the triangle view
//! - **Term Generation**: values and LaTeX expressions for every term
//! - **Visual Data**: chart series, 3D surface heights, term markers
//!
//! ## Quick Start
//!
//! ```rust
//! use binomia::prelude::*;
//!
//! let expansion = expand_binomial(1.0, 1.0, 2, None)?;
//! assert_eq!(expansion.expanded_form(), r"a^{2} + 2 \cdot a \cdot b + b^{2}");
//! assert_eq!(expansion.total(), 4.0);
//!
//! let triangle = generate_triangle(5)?;
//! assert_eq!(triangle.row(5).map(PascalRow::len), Some(6));
//! # Ok::<(), BinomialError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use binomia_expand as expand;
pub use binomia_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use binomia_expand::{
        coefficient_labels, expand_binomial, generate_triangle, surface_markers, ChartSeries,
        CoefficientSurface, EngineLimits, Expansion, PascalRow, SurfaceLabel, SurfaceMarker, Term,
        Triangle, TriangleView,
    };
    pub use binomia_integers::{binomial_coefficient, BinomialError, Coefficient, MAX_ORDER};
}
