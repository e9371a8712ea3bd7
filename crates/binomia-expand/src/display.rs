//! Math-typesetting strings for binomial terms.
//!
//! All strings use LaTeX syntax as understood by KaTeX-style renderers:
//! `\cdot` for multiplication and `^{e}` for exponents.

use binomia_integers::Coefficient;
use num_traits::One;

/// The identity every expansion instantiates.
pub const GENERAL_FORMULA: &str = r"(a+b)^n = \sum_{k=0}^{n} \binom{n}{k} a^{n-k} b^k";

const CDOT: &str = r" \cdot ";

/// Formats a base value for display.
///
/// Uses the shortest decimal that round-trips, so `2.0` prints as `2` and
/// `0.1` as `0.1`. Negative zero prints as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Builds the display expression for the term C · aᵖ · bᵠ.
///
/// The coefficient numeral is omitted when it is 1, except for the constant
/// term. The join before the a-factor is only emitted after a coefficient
/// other than 1; the join before the b-factor whenever something precedes it.
#[must_use]
pub fn term_expression(
    coefficient: &Coefficient,
    a: f64,
    b: f64,
    a_exponent: usize,
    b_exponent: usize,
) -> String {
    let mut expr = String::new();

    if !coefficient.is_one() || (a_exponent == 0 && b_exponent == 0) {
        expr.push_str(&coefficient.to_string());
    }

    if a_exponent > 0 {
        if !expr.is_empty() && !coefficient.is_one() {
            expr.push_str(CDOT);
        }
        push_factor(&mut expr, a, 'a', a_exponent);
    }

    if b_exponent > 0 {
        if !expr.is_empty() {
            expr.push_str(CDOT);
        }
        push_factor(&mut expr, b, 'b', b_exponent);
    }

    if expr.is_empty() {
        expr.push('1');
    }
    expr
}

/// Appends `a`, `(-a)` or `{value}a`, then the exponent when above 1.
#[allow(clippy::float_cmp)]
fn push_factor(expr: &mut String, value: f64, symbol: char, exponent: usize) {
    if value == 1.0 {
        expr.push(symbol);
    } else if value == -1.0 {
        expr.push_str(&format!("(-{symbol})"));
    } else {
        expr.push_str(&format_number(value));
        expr.push(symbol);
    }

    if exponent > 1 {
        expr.push_str(&format!("^{{{exponent}}}"));
    }
}

/// Builds the header expression `(a + b)^{n}` for the given parameters.
///
/// A negative `b` is shown as a subtraction of its magnitude.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn binomial_expression(a: f64, b: f64, n: usize) -> String {
    let mut expr = String::from("(");

    if a == 1.0 {
        expr.push('a');
    } else if a == -1.0 {
        expr.push_str("-a");
    } else {
        expr.push_str(&format_number(a));
        expr.push('a');
    }

    if b >= 0.0 {
        if b == 1.0 {
            expr.push_str(" + b");
        } else {
            expr.push_str(&format!(" + {}b", format_number(b)));
        }
    } else if b == -1.0 {
        expr.push_str(" - b");
    } else {
        expr.push_str(&format!(" - {}b", format_number(b.abs())));
    }

    expr.push_str(&format!(")^{{{n}}}"));
    expr
}
