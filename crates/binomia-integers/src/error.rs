//! Errors raised by the expansion engine.

use thiserror::Error;

/// Errors that can occur while computing coefficients, triangles or expansions.
///
/// An out-of-range `k` is deliberately absent: C(n, k) is zero there by
/// convention and [`binomial_coefficient`](crate::binomial_coefficient)
/// returns it as a value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BinomialError {
    /// The order is above the ceiling at which results stop fitting in an `f64`.
    #[error("order {n} exceeds the precision ceiling of {max}")]
    PrecisionOverflow {
        /// The requested order.
        n: i64,
        /// The largest order the engine accepts.
        max: i64,
    },

    /// A term evaluated to infinity or NaN although every input was finite.
    #[error("term {k} of the expansion is not representable as a finite f64")]
    ValueOverflow {
        /// Index of the first term that overflowed.
        k: usize,
    },

    /// An argument is outside the domain of the operation.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human readable description of the problem.
        reason: String,
    },
}

impl BinomialError {
    /// Creates an [`BinomialError::InvalidArgument`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Returns true if clamping the input to the ceiling would recover.
    #[must_use]
    pub fn is_precision_overflow(&self) -> bool {
        matches!(self, Self::PrecisionOverflow { .. })
    }
}
