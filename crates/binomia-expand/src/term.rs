//! Term generation for (a + b)ⁿ.
//!
//! The expansion is Σₖ C(n, k) · aⁿ⁻ᵏ · bᵏ for k = 0..=n. Each [`Term`]
//! carries its exact coefficient, the exponents, the evaluated value and a
//! display expression.

use binomia_integers::{binomial_coefficient, validate_order, BinomialError, Coefficient};
use tracing::{debug, trace};

use crate::display::{binomial_expression, term_expression};

/// One addend C(n, k) · aⁿ⁻ᵏ · bᵏ of an expansion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Term {
    /// The summation index, 0 ≤ k ≤ n.
    pub k: usize,
    /// C(n, k).
    pub coefficient: Coefficient,
    /// n − k.
    pub a_exponent: usize,
    /// k.
    pub b_exponent: usize,
    /// The term evaluated at the expansion's parameters.
    pub numeric_value: f64,
    /// LaTeX rendering of the symbolic term.
    pub display_expression: String,
}

/// The full expansion of (a + b)ⁿ, terms in ascending k.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Expansion {
    a: f64,
    b: f64,
    n: usize,
    x: Option<f64>,
    terms: Vec<Term>,
}

/// Expands (a + b)ⁿ into its n + 1 terms.
///
/// With `x` present each base is scaled before exponentiation, so term k
/// evaluates to C(n, k) · (a·x)ⁿ⁻ᵏ · (b·x)ᵏ. Zero bases are allowed.
///
/// # Errors
///
/// - [`BinomialError::InvalidArgument`] for a negative `n` or a non-finite
///   `a`, `b` or `x`.
/// - [`BinomialError::PrecisionOverflow`] when `n` exceeds
///   [`MAX_ORDER`](binomia_integers::MAX_ORDER).
/// - [`BinomialError::ValueOverflow`] when a term evaluates to infinity or
///   NaN, e.g. (10²⁰⁰ + 1)².
pub fn expand_binomial(
    a: f64,
    b: f64,
    n: i64,
    x: Option<f64>,
) -> Result<Expansion, BinomialError> {
    ensure_finite("a", a)?;
    ensure_finite("b", b)?;
    if let Some(x) = x {
        ensure_finite("x", x)?;
    }
    let order = validate_order("n", n)?;
    debug!(a, b, n, ?x, "expanding binomial");

    let (base_a, base_b) = match x {
        Some(x) => (a * x, b * x),
        None => (a, b),
    };

    let mut terms = Vec::with_capacity(order + 1);
    for k in 0..=order {
        let coefficient = binomial_coefficient(n, index(k))?;
        let a_exponent = order - k;
        let b_exponent = k;

        let numeric_value =
            coefficient.to_f64() * powi(base_a, a_exponent) * powi(base_b, b_exponent);
        if !numeric_value.is_finite() {
            return Err(BinomialError::ValueOverflow { k });
        }
        let display_expression = term_expression(&coefficient, a, b, a_exponent, b_exponent);
        trace!(k, %coefficient, numeric_value, "term");

        terms.push(Term {
            k,
            coefficient,
            a_exponent,
            b_exponent,
            numeric_value,
            display_expression,
        });
    }

    Ok(Expansion {
        a,
        b,
        n: order,
        x,
        terms,
    })
}

fn ensure_finite(name: &'static str, value: f64) -> Result<(), BinomialError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BinomialError::invalid(
            name,
            format!("must be finite, got {value}"),
        ))
    }
}

// k never exceeds MAX_ORDER.
fn index(k: usize) -> i64 {
    i64::try_from(k).unwrap_or(i64::MAX)
}

fn powi(base: f64, exponent: usize) -> f64 {
    base.powi(i32::try_from(exponent).unwrap_or(i32::MAX))
}

impl Expansion {
    /// Returns the a parameter.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the b parameter.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the order n.
    #[must_use]
    pub fn order(&self) -> usize {
        self.n
    }

    /// Returns the substituted x, if any.
    #[must_use]
    pub fn x(&self) -> Option<f64> {
        self.x
    }

    /// Returns the terms in ascending k.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the term with index k.
    #[must_use]
    pub fn term(&self, k: usize) -> Option<&Term> {
        self.terms.get(k)
    }

    /// Returns the number of terms, always n + 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// An expansion always has at least the constant term.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over the terms.
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Sum of all term values: (a + b)ⁿ, or (a·x + b·x)ⁿ with x present.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.terms.iter().map(|t| t.numeric_value).sum()
    }

    /// The `(a + b)^{n}` header for these parameters.
    #[must_use]
    pub fn header(&self) -> String {
        binomial_expression(self.a, self.b, self.n)
    }

    /// Joins the term expressions into the expanded polynomial.
    ///
    /// Terms after the first are joined with ` - ` when their value is
    /// negative (dropping one leading `-` from the expression), else ` + `.
    #[must_use]
    pub fn expanded_form(&self) -> String {
        let mut out = String::new();
        for (i, term) in self.terms.iter().enumerate() {
            let expr = term.display_expression.as_str();
            if i == 0 {
                out.push_str(expr);
            } else if term.numeric_value < 0.0 {
                out.push_str(" - ");
                out.push_str(expr.strip_prefix('-').unwrap_or(expr));
            } else {
                out.push_str(" + ");
                out.push_str(expr);
            }
        }
        out
    }

    /// The evaluated total as `= {total}` with three decimals.
    #[must_use]
    pub fn numeric_result(&self) -> String {
        let total = self.total();
        // Avoid printing "-0.000".
        let total = if total == 0.0 { 0.0 } else { total };
        format!("= {total:.3}")
    }
}

impl<'a> IntoIterator for &'a Expansion {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(e: &Expansion) -> Vec<f64> {
        e.iter().map(|t| t.numeric_value).collect()
    }

    fn coefficients(e: &Expansion) -> Vec<u64> {
        e.iter().map(|t| t.coefficient.to_u64().unwrap()).collect()
    }

    #[test]
    fn test_unit_bases_cubed() {
        let e = expand_binomial(1.0, 1.0, 3, None).unwrap();
        assert_eq!(e.len(), 4);
        assert_eq!(e.iter().map(|t| t.k).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(coefficients(&e), vec![1, 3, 3, 1]);
        assert_eq!(values(&e), vec![1.0, 3.0, 3.0, 1.0]);
        assert_eq!(e.total(), 8.0);
    }

    #[test]
    fn test_negative_b() {
        let e = expand_binomial(2.0, -1.0, 2, None).unwrap();
        assert_eq!(coefficients(&e), vec![1, 2, 1]);
        assert_eq!(values(&e), vec![4.0, -4.0, 1.0]);
        assert_eq!(e.total(), 1.0);
    }

    #[test]
    fn test_display_expressions() {
        let e = expand_binomial(1.0, 1.0, 2, None).unwrap();
        assert_eq!(e.term(0).unwrap().display_expression, "a^{2}");
        assert_eq!(e.term(1).unwrap().display_expression, r"2 \cdot a \cdot b");
        assert_eq!(e.term(2).unwrap().display_expression, "b^{2}");
    }

    #[test]
    fn test_exponents() {
        let e = expand_binomial(3.0, 4.0, 5, None).unwrap();
        for term in &e {
            assert_eq!(term.a_exponent, 5 - term.k);
            assert_eq!(term.b_exponent, term.k);
        }
    }

    #[test]
    fn test_order_zero() {
        let e = expand_binomial(7.0, -2.0, 0, None).unwrap();
        assert_eq!(e.len(), 1);
        let t = e.term(0).unwrap();
        assert_eq!(t.display_expression, "1");
        assert_eq!(t.numeric_value, 1.0);
    }

    #[test]
    fn test_x_substitution_scales_bases() {
        // (2x + 3x)^2 at x = 2 is 10^2.
        let e = expand_binomial(2.0, 3.0, 2, Some(2.0)).unwrap();
        assert_eq!(values(&e), vec![16.0, 48.0, 36.0]);
        assert_eq!(e.total(), 100.0);
        assert_eq!(e.x(), Some(2.0));
        // Display keeps the unscaled bases.
        assert_eq!(e.term(0).unwrap().display_expression, "2a^{2}");
    }

    #[test]
    fn test_zero_base() {
        let e = expand_binomial(0.0, 2.0, 3, None).unwrap();
        assert_eq!(values(&e), vec![0.0, 0.0, 0.0, 8.0]);
        assert_eq!(e.term(0).unwrap().display_expression, "0a^{3}");
        assert_eq!(e.term(1).unwrap().display_expression, r"3 \cdot 0a^{2} \cdot 2b");
    }

    #[test]
    fn test_errors() {
        assert!(expand_binomial(1.0, 1.0, 171, None)
            .unwrap_err()
            .is_precision_overflow());
        assert!(matches!(
            expand_binomial(1.0, 1.0, -1, None),
            Err(BinomialError::InvalidArgument { name: "n", .. })
        ));
        assert!(matches!(
            expand_binomial(f64::NAN, 1.0, 2, None),
            Err(BinomialError::InvalidArgument { name: "a", .. })
        ));
        assert!(matches!(
            expand_binomial(1.0, 1.0, 2, Some(f64::INFINITY)),
            Err(BinomialError::InvalidArgument { name: "x", .. })
        ));
    }

    #[test]
    fn test_overflowing_terms_fail() {
        assert_eq!(
            expand_binomial(1e200, 1.0, 2, None),
            Err(BinomialError::ValueOverflow { k: 0 })
        );
        // 0 · inf in the middle term is NaN; the first bad term is reported.
        assert_eq!(
            expand_binomial(1e-200, 1e200, 4, None),
            Err(BinomialError::ValueOverflow { k: 2 })
        );
        // Scaling by x can overflow bases that are fine on their own.
        assert_eq!(
            expand_binomial(1e160, 1.0, 2, Some(1e160)),
            Err(BinomialError::ValueOverflow { k: 0 })
        );
    }

    #[test]
    fn test_ceiling_order_succeeds() {
        let e = expand_binomial(1.0, 1.0, 170, None).unwrap();
        assert_eq!(e.len(), 171);
        assert_eq!(e.term(1).unwrap().coefficient, 170u64);
        assert!(e.iter().all(|t| t.numeric_value.is_finite()));
    }

    #[test]
    fn test_expanded_form() {
        let e = expand_binomial(1.0, 1.0, 2, None).unwrap();
        assert_eq!(e.expanded_form(), r"a^{2} + 2 \cdot a \cdot b + b^{2}");

        let e = expand_binomial(1.0, -2.0, 2, None).unwrap();
        assert_eq!(
            e.expanded_form(),
            r"a^{2} - 2 \cdot a \cdot -2b + -2b^{2}"
        );

        // A negative value whose expression starts with a sign drops it.
        let e = expand_binomial(-2.0, 1.0, 1, None).unwrap();
        assert_eq!(e.expanded_form(), "-2a + b");
        let e = expand_binomial(1.0, -3.0, 1, None).unwrap();
        assert_eq!(e.expanded_form(), "a - 3b");
    }

    #[test]
    fn test_numeric_result_and_header() {
        let e = expand_binomial(2.0, -1.0, 2, None).unwrap();
        assert_eq!(e.numeric_result(), "= 1.000");
        assert_eq!(e.header(), "(2a - b)^{2}");

        let e = expand_binomial(1.0, -1.0, 3, None).unwrap();
        assert_eq!(e.numeric_result(), "= 0.000");
    }
}
