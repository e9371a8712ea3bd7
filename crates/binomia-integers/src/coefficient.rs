//! Exact binomial coefficients.
//!
//! This module provides a wrapper around `dashu::UBig` sized for the values
//! that appear in Pascal's triangle. C(170, 85) already has 50 decimal
//! digits, well past what `u128` can hold.

use dashu::base::BitTest;
use dashu::integer::UBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul};

/// An exact non-negative integer coefficient.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coefficient(UBig);

impl Coefficient {
    /// Creates a new coefficient from a u64.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(UBig::from(value))
    }

    /// Returns the nearest `f64`.
    ///
    /// Exact up to 2^53; larger values round to nearest.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// Attempts to convert to a u64.
    ///
    /// Returns `None` if the value doesn't fit in a u64.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.0.clone().try_into().ok()
    }

    /// Returns the number of bits needed to represent this coefficient.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// One step of the multiplicative formula: `self * numer / denom`.
    ///
    /// The caller guarantees the division is exact, which holds for
    /// C(n, i - 1) * (n - i + 1) / i.
    pub(crate) fn scale_exact(self, numer: u64, denom: u64) -> Self {
        Self(self.0 * UBig::from(numer) / UBig::from(denom))
    }
}

impl Zero for Coefficient {
    fn zero() -> Self {
        Self(UBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == UBig::ZERO
    }
}

impl One for Coefficient {
    fn one() -> Self {
        Self(UBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == UBig::ONE
    }
}

impl fmt::Debug for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coefficient({})", self.0)
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Pascal's rule: C(n, k) = C(n - 1, k - 1) + C(n - 1, k).
impl Add for Coefficient {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add for &Coefficient {
    type Output = Coefficient;

    fn add(self, rhs: Self) -> Self::Output {
        Coefficient(&self.0 + &rhs.0)
    }
}

impl Mul for Coefficient {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul for &Coefficient {
    type Output = Coefficient;

    fn mul(self, rhs: Self) -> Self::Output {
        Coefficient(&self.0 * &rhs.0)
    }
}

impl From<u64> for Coefficient {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<UBig> for Coefficient {
    fn from(value: UBig) -> Self {
        Self(value)
    }
}

impl PartialEq<u64> for Coefficient {
    fn eq(&self, other: &u64) -> bool {
        self.to_u64() == Some(*other)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Coefficient {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
