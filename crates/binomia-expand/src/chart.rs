//! Series for the coefficient chart.

use crate::term::Expansion;

/// Bar and line series derived from an expansion.
///
/// Coefficients feed the bar series. Term magnitudes feed the line series
/// on a secondary axis, so signs are dropped.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartSeries {
    /// `k=0`, `k=1`, …
    pub labels: Vec<String>,
    /// C(n, k) as floating point.
    pub coefficients: Vec<f64>,
    /// |value| of each term.
    pub magnitudes: Vec<f64>,
}

impl ChartSeries {
    /// Builds the series for an expansion.
    #[must_use]
    pub fn from_expansion(expansion: &Expansion) -> Self {
        let mut labels = Vec::with_capacity(expansion.len());
        let mut coefficients = Vec::with_capacity(expansion.len());
        let mut magnitudes = Vec::with_capacity(expansion.len());

        for term in expansion {
            labels.push(format!("k={}", term.k));
            coefficients.push(term.coefficient.to_f64());
            magnitudes.push(term.numeric_value.abs());
        }

        Self {
            labels,
            coefficients,
            magnitudes,
        }
    }
}

impl From<&Expansion> for ChartSeries {
    fn from(expansion: &Expansion) -> Self {
        Self::from_expansion(expansion)
    }
}
