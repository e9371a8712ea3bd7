//! Property-based tests for triangles and expansions.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::term::expand_binomial;
    use crate::triangle::generate_triangle;
    use binomia_integers::binomial_coefficient;

    // Strategy for generating bases in the visualizer's slider range
    fn base() -> impl Strategy<Value = f64> {
        -10.0f64..=10.0
    }

    // Strategy for generating interactive expansion orders
    fn order() -> impl Strategy<Value = i64> {
        0i64..=20
    }

    proptest! {
        #[test]
        fn expansion_sums_to_power(a in base(), b in base(), n in order()) {
            let e = expand_binomial(a, b, n, None).unwrap();
            let expected = (a + b).powi(i32::try_from(n).unwrap());
            // Cancellation error scales with the largest term, not the sum.
            let magnitude: f64 = e.iter().map(|t| t.numeric_value.abs()).sum();
            let tolerance = 1e-6 * expected.abs().max(1.0) + 1e-12 * magnitude;
            prop_assert!((e.total() - expected).abs() <= tolerance);
        }

        #[test]
        fn substitution_sums_to_scaled_power(
            a in base(),
            b in base(),
            x in -2.0f64..=2.0,
            n in 0i64..=12,
        ) {
            let e = expand_binomial(a, b, n, Some(x)).unwrap();
            let expected = (a * x + b * x).powi(i32::try_from(n).unwrap());
            let magnitude: f64 = e.iter().map(|t| t.numeric_value.abs()).sum();
            let tolerance = 1e-6 * expected.abs().max(1.0) + 1e-12 * magnitude;
            prop_assert!((e.total() - expected).abs() <= tolerance);
        }

        #[test]
        fn term_shape(a in base(), b in base(), n in order()) {
            let e = expand_binomial(a, b, n, None).unwrap();
            let order = usize::try_from(n).unwrap();
            prop_assert_eq!(e.len(), order + 1);
            prop_assert_eq!(e.order(), order);

            for (k, term) in e.iter().enumerate() {
                prop_assert_eq!(term.k, k);
                prop_assert_eq!(term.a_exponent + term.b_exponent, order);
                prop_assert_eq!(term.b_exponent, k);
                let expected = binomial_coefficient(n, i64::try_from(k).unwrap()).unwrap();
                prop_assert_eq!(&term.coefficient, &expected);
                prop_assert!(!term.display_expression.is_empty());
            }
        }

        #[test]
        fn coefficients_are_symmetric(a in base(), b in base(), n in order()) {
            let e = expand_binomial(a, b, n, None).unwrap();
            let terms = e.terms();
            for (lo, hi) in terms.iter().zip(terms.iter().rev()) {
                prop_assert_eq!(&lo.coefficient, &hi.coefficient);
            }
        }

        #[test]
        fn triangle_rows_match_coefficients(max_row in 0i64..=30) {
            let t = generate_triangle(max_row).unwrap();
            prop_assert_eq!(t.len(), usize::try_from(max_row).unwrap() + 1);
            for (i, row) in t.iter().enumerate() {
                prop_assert_eq!(row.len(), i + 1);
                let n = i64::try_from(i).unwrap();
                for (j, entry) in row.iter().enumerate() {
                    let expected = binomial_coefficient(n, i64::try_from(j).unwrap()).unwrap();
                    prop_assert_eq!(entry, &expected);
                }
            }
        }

        #[test]
        fn triangle_matches_expansion_coefficients(n in order()) {
            let t = generate_triangle(n).unwrap();
            let e = expand_binomial(1.0, 1.0, n, None).unwrap();
            let row = t.row(usize::try_from(n).unwrap()).unwrap();
            let from_terms: Vec<_> = e.iter().map(|term| term.coefficient.clone()).collect();
            prop_assert_eq!(row.entries(), from_terms.as_slice());
        }
    }
}
