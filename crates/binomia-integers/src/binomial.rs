//! The binomial coefficient C(n, k).
//!
//! Computed with the multiplicative formula
//! C(n, k) = ∏ᵢ₌₁ᵏ (n − i + 1) / i, carried out on exact integers so every
//! intermediate quotient is exact and no final rounding is needed.

use num_traits::{One, Zero};

use crate::{BinomialError, Coefficient};

/// The largest order accepted by the engine.
///
/// 170! is the largest factorial representable as an `f64`.
pub const MAX_ORDER: i64 = 170;

/// Computes the binomial coefficient C(n, k).
///
/// Returns zero when `k < 0` or `k > n`; that includes every negative `n`.
/// Runs in O(min(k, n − k)) big-integer steps.
///
/// # Errors
///
/// Returns [`BinomialError::PrecisionOverflow`] when `n > MAX_ORDER`,
/// regardless of `k`.
pub fn binomial_coefficient(n: i64, k: i64) -> Result<Coefficient, BinomialError> {
    if n > MAX_ORDER {
        return Err(BinomialError::PrecisionOverflow { n, max: MAX_ORDER });
    }
    if k < 0 || k > n {
        return Ok(Coefficient::zero());
    }
    if k == 0 || k == n {
        return Ok(Coefficient::one());
    }

    // 0 < k < n <= MAX_ORDER from here on, so both casts are lossless.
    let n = n.unsigned_abs();
    let k = k.unsigned_abs().min(n - k.unsigned_abs());

    let mut result = Coefficient::one();
    for i in 1..=k {
        result = result.scale_exact(n - i + 1, i);
    }
    Ok(result)
}

/// Checks that `n` is a usable expansion order and returns it as `usize`.
///
/// # Errors
///
/// Returns [`BinomialError::InvalidArgument`] for negative `n` and
/// [`BinomialError::PrecisionOverflow`] above [`MAX_ORDER`].
pub fn validate_order(name: &'static str, n: i64) -> Result<usize, BinomialError> {
    if n < 0 {
        return Err(BinomialError::invalid(
            name,
            format!("must be non-negative, got {n}"),
        ));
    }
    if n > MAX_ORDER {
        return Err(BinomialError::PrecisionOverflow { n, max: MAX_ORDER });
    }
    usize::try_from(n)
        .map_err(|_| BinomialError::invalid(name, format!("{n} does not fit in usize")))
}

/// Converts a floating-point control value into an integer argument.
///
/// Slider and text inputs arrive as `f64`; orders and indices must be whole.
///
/// # Errors
///
/// Returns [`BinomialError::InvalidArgument`] if `value` is NaN, infinite,
/// fractional, or outside the `i64` range.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn integer_argument(name: &'static str, value: f64) -> Result<i64, BinomialError> {
    if !value.is_finite() {
        return Err(BinomialError::invalid(
            name,
            format!("must be finite, got {value}"),
        ));
    }
    if value.fract() != 0.0 {
        return Err(BinomialError::invalid(
            name,
            format!("must be an integer, got {value}"),
        ));
    }
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(BinomialError::invalid(
            name,
            format!("{value} is out of range"),
        ));
    }
    Ok(value as i64)
}
