//! Property-based tests for binomial coefficients.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{binomial_coefficient, Coefficient, MAX_ORDER};

    // Strategy for generating orders inside the precision ceiling
    fn order() -> impl Strategy<Value = i64> {
        0i64..=MAX_ORDER
    }

    // Strategy for generating (n, k) with 0 <= k <= n
    fn order_and_index() -> impl Strategy<Value = (i64, i64)> {
        order().prop_flat_map(|n| (Just(n), 0..=n))
    }

    fn c(n: i64, k: i64) -> Coefficient {
        binomial_coefficient(n, k).unwrap()
    }

    proptest! {
        #[test]
        fn symmetry((n, k) in order_and_index()) {
            prop_assert_eq!(c(n, k), c(n, n - k));
        }

        #[test]
        fn edges_are_one(n in order()) {
            prop_assert!(c(n, 0).is_one());
            prop_assert!(c(n, n).is_one());
        }

        #[test]
        fn pascal_rule(n in 2i64..=MAX_ORDER, k_seed in any::<prop::sample::Index>()) {
            // 0 < k < n
            let k = 1 + i64::try_from(k_seed.index(usize::try_from(n - 1).unwrap())).unwrap();
            prop_assert_eq!(c(n, k), c(n - 1, k - 1) + c(n - 1, k));
        }

        #[test]
        fn out_of_range_is_zero(n in order(), offset in 1i64..1000) {
            prop_assert!(c(n, -offset).is_zero());
            prop_assert!(c(n, n + offset).is_zero());
        }

        #[test]
        fn above_ceiling_fails(n in (MAX_ORDER + 1)..10_000i64, k in -10i64..10_000) {
            let err = binomial_coefficient(n, k).unwrap_err();
            prop_assert!(err.is_precision_overflow());
        }

        #[test]
        fn row_sums_to_power_of_two(n in 0i64..=60) {
            let sum = (0..=n).fold(Coefficient::zero(), |acc, k| acc + c(n, k));
            prop_assert_eq!(sum, 1u64 << n);
        }

        #[test]
        fn f64_view_is_finite((n, k) in order_and_index()) {
            prop_assert!(c(n, k).to_f64().is_finite());
        }
    }
}
