//! Pascal's triangle.
//!
//! Row i holds C(i, 0), …, C(i, i). Building rows 0..=m costs O(m²)
//! coefficients, so callers should keep `max_row` small; the visualizer
//! never shows more than a dozen rows.

use binomia_integers::{binomial_coefficient, validate_order, BinomialError, Coefficient};
use tracing::{debug, trace};

use crate::limits::EngineLimits;

/// One row of Pascal's triangle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PascalRow(Vec<Coefficient>);

impl PascalRow {
    /// Builds row `i` entry by entry.
    fn build(i: usize) -> Result<Self, BinomialError> {
        let n = i64::try_from(i).map_err(|_| BinomialError::invalid("row", "too large"))?;
        let entries = (0..=n)
            .map(|k| binomial_coefficient(n, k))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(entries))
    }

    /// Returns the row index, one less than its length.
    #[must_use]
    pub fn index(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Returns the entries C(i, 0), …, C(i, i).
    #[must_use]
    pub fn entries(&self) -> &[Coefficient] {
        &self.0
    }

    /// Returns C(i, j), or `None` outside the row.
    #[must_use]
    pub fn get(&self, j: usize) -> Option<&Coefficient> {
        self.0.get(j)
    }

    /// Returns the number of entries, i + 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Rows are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, Coefficient> {
        self.0.iter()
    }
}

/// Rows 0 through `max_row` of Pascal's triangle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Triangle {
    rows: Vec<PascalRow>,
}

/// Generates rows `0..=max_row` of Pascal's triangle.
///
/// # Errors
///
/// Returns [`BinomialError::InvalidArgument`] for a negative `max_row` and
/// [`BinomialError::PrecisionOverflow`] past
/// [`MAX_ORDER`](binomia_integers::MAX_ORDER).
pub fn generate_triangle(max_row: i64) -> Result<Triangle, BinomialError> {
    let depth = validate_order("max_row", max_row)?;
    debug!(max_row, "generating pascal triangle");

    let mut rows = Vec::with_capacity(depth + 1);
    for i in 0..=depth {
        let row = PascalRow::build(i)?;
        trace!(i, len = row.len(), "row");
        rows.push(row);
    }
    Ok(Triangle { rows })
}

impl Triangle {
    /// Returns the rows from the apex down.
    #[must_use]
    pub fn rows(&self) -> &[PascalRow] {
        &self.rows
    }

    /// Returns row `i`, or `None` below the last row.
    #[must_use]
    pub fn row(&self, i: usize) -> Option<&PascalRow> {
        self.rows.get(i)
    }

    /// Returns the index of the last row.
    #[must_use]
    pub fn max_row(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Returns the number of rows, `max_row + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A triangle always has the apex row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, PascalRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a Triangle {
    type Item = &'a PascalRow;
    type IntoIter = std::slice::Iter<'a, PascalRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// The triangle shown next to an expansion of order n.
///
/// Shows two rows past n, capped by
/// [`EngineLimits::triangle_display_cap`]. Row n is highlighted when it is
/// among the shown rows.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TriangleView {
    triangle: Triangle,
    highlighted_row: Option<usize>,
}

impl TriangleView {
    /// Builds the view for an expansion of order `n`.
    ///
    /// # Errors
    ///
    /// Returns [`BinomialError::InvalidArgument`] for a negative `n`, and
    /// [`BinomialError::PrecisionOverflow`] if the display cap itself is
    /// past the ceiling.
    pub fn for_order(n: i64, limits: &EngineLimits) -> Result<Self, BinomialError> {
        let order = usize::try_from(n).map_err(|_| {
            BinomialError::invalid("n", format!("must be non-negative, got {n}"))
        })?;
        let depth = order.saturating_add(2).min(limits.triangle_display_cap);
        let triangle = generate_triangle(i64::try_from(depth).unwrap_or(i64::MAX))?;
        let highlighted_row = (order <= triangle.max_row()).then_some(order);
        Ok(Self {
            triangle,
            highlighted_row,
        })
    }

    /// Returns the displayed triangle.
    #[must_use]
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    /// Returns the highlighted row, if it is displayed.
    #[must_use]
    pub fn highlighted_row(&self) -> Option<usize> {
        self.highlighted_row
    }

    /// Returns true if cell (row, col) belongs to the highlighted row.
    #[must_use]
    pub fn is_highlighted(&self, row: usize, col: usize) -> bool {
        self.highlighted_row == Some(row) && col <= row
    }
}
