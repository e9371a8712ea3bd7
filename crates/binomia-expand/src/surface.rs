//! Height map, labels and markers for the 3D coefficient surface.
//!
//! The surface is a square grid over (i, j). Cells with j ≤ i sit at height
//! 2·ln(C(i, j) + 1). Cells above the diagonal are flat.

use binomia_integers::{binomial_coefficient, validate_order, BinomialError, Coefficient};
use tracing::debug;

use crate::limits::EngineLimits;
use crate::term::Expansion;
use crate::triangle::generate_triangle;

/// Coefficient value at which the color intensity saturates.
const INTENSITY_SATURATION: f64 = 100.0;

/// Marker heights float this far above the surface.
const MARKER_LIFT: f64 = 2.0;

/// The expansion order that sits at z = 0.
const MARKER_DEPTH_ORIGIN: f64 = 6.0;

/// Labels float this far above the surface.
const LABEL_LIFT: f64 = 1.0;

fn log_height(coefficient: f64) -> f64 {
    (coefficient + 1.0).ln() * 2.0
}

/// Row-major height map of C(i, j) for 0 ≤ i, j ≤ order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CoefficientSurface {
    order: usize,
    heights: Vec<f64>,
    intensities: Vec<Option<f64>>,
}

impl CoefficientSurface {
    /// Builds the surface of order [`EngineLimits::surface_order`].
    ///
    /// # Errors
    ///
    /// Returns [`BinomialError::PrecisionOverflow`] if the configured order
    /// is past the ceiling.
    pub fn build(limits: &EngineLimits) -> Result<Self, BinomialError> {
        let requested = i64::try_from(limits.surface_order).unwrap_or(i64::MAX);
        let order = validate_order("surface_order", requested)?;
        debug!(order, "building coefficient surface");

        let side = order + 1;
        let mut heights = Vec::with_capacity(side * side);
        let mut intensities = Vec::with_capacity(side * side);

        for i in 0..=requested {
            for j in 0..=requested {
                if j <= i {
                    let c = binomial_coefficient(i, j)?.to_f64();
                    heights.push(log_height(c));
                    intensities.push(Some((c / INTENSITY_SATURATION).min(1.0)));
                } else {
                    heights.push(0.0);
                    intensities.push(None);
                }
            }
        }

        Ok(Self {
            order,
            heights,
            intensities,
        })
    }

    /// Returns the grid order; the grid has `order + 1` cells per side.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns all heights, row-major.
    #[must_use]
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Returns the height of cell (i, j).
    #[must_use]
    pub fn height(&self, i: usize, j: usize) -> Option<f64> {
        self.cell(i, j).map(|idx| self.heights[idx])
    }

    /// Returns the color intensity in `[0, 1]` of cell (i, j), or `None`
    /// above the diagonal.
    #[must_use]
    pub fn intensity(&self, i: usize, j: usize) -> Option<f64> {
        self.cell(i, j).and_then(|idx| self.intensities[idx])
    }

    fn cell(&self, i: usize, j: usize) -> Option<usize> {
        (i <= self.order && j <= self.order).then(|| i * (self.order + 1) + j)
    }
}

/// Position of one term's marker above the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SurfaceMarker {
    /// The term index.
    pub k: usize,
    /// Horizontal offset, centered on the middle term.
    pub x: f64,
    /// Height above the surface.
    pub y: f64,
    /// Depth, shared by every term of the expansion.
    pub z: f64,
}

/// Places one marker per term of `expansion`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn surface_markers(expansion: &Expansion) -> Vec<SurfaceMarker> {
    let n = expansion.order() as f64;
    let z = (n - MARKER_DEPTH_ORIGIN) * 2.0;

    expansion
        .iter()
        .map(|term| SurfaceMarker {
            k: term.k,
            x: (term.k as f64 - n / 2.0) * 2.0,
            y: log_height(term.coefficient.to_f64()) + MARKER_LIFT,
            z,
        })
        .collect()
}

/// A coefficient numeral placed above cell (i, j) of the surface.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SurfaceLabel {
    /// Row of Pascal's triangle.
    pub i: usize,
    /// Position within the row.
    pub j: usize,
    /// The labelled value C(i, j).
    pub coefficient: Coefficient,
    /// Horizontal offset, centered on the row's middle.
    pub x: f64,
    /// Height above the surface.
    pub y: f64,
    /// Depth, centered on the middle labelled row.
    pub z: f64,
}

/// Labels every C(i, j) with j ≤ i ≤ [`EngineLimits::label_order`].
///
/// # Errors
///
/// Returns [`BinomialError::PrecisionOverflow`] if the configured order
/// is past the ceiling.
#[allow(clippy::cast_precision_loss)]
pub fn coefficient_labels(limits: &EngineLimits) -> Result<Vec<SurfaceLabel>, BinomialError> {
    let requested = i64::try_from(limits.label_order).unwrap_or(i64::MAX);
    let order = validate_order("label_order", requested)?;
    debug!(order, "placing coefficient labels");

    let triangle = generate_triangle(requested)?;
    let depth_origin = order as f64 / 2.0;
    let mut labels = Vec::with_capacity((order + 1) * (order + 2) / 2);
    for row in &triangle {
        let i = row.index();
        for (j, coefficient) in row.iter().enumerate() {
            labels.push(SurfaceLabel {
                i,
                j,
                coefficient: coefficient.clone(),
                x: (j as f64 - i as f64 / 2.0) * 2.0,
                y: log_height(coefficient.to_f64()) + LABEL_LIFT,
                z: (i as f64 - depth_origin) * 2.0,
            });
        }
    }
    Ok(labels)
}
