//! Property-based tests for the Strassen engine.

#[cfg(test)]
mod tests {
    use proptest::collection::vec;
    use proptest::prelude::*;

    use crate::cpu::multiply;
    use crate::{strassen, Matrix, Strassen};

    // Two n x n operands with n a power of two up to 32.
    fn operands() -> impl Strategy<Value = (Matrix, Matrix)> {
        (0u32..=5).prop_flat_map(|exp| {
            let n = 1usize << exp;
            (
                vec(-100i64..100, n * n),
                vec(-100i64..100, n * n),
            )
                .prop_map(move |(a, b)| {
                    (
                        Matrix::new(n, n, a).unwrap(),
                        Matrix::new(n, n, b).unwrap(),
                    )
                })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn strassen_matches_conventional((a, b) in operands(), cutoff in 1usize..=8) {
            let expected = multiply(&a, &b).unwrap();
            let got = strassen(&a, &b, cutoff).unwrap();
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn result_independent_of_cutoff((a, b) in operands()) {
            let n = a.rows();
            let reference = strassen(&a, &b, n).unwrap();
            prop_assert_eq!(&strassen(&a, &b, (n / 2).max(1)).unwrap(), &reference);
            prop_assert_eq!(&strassen(&a, &b, 1).unwrap(), &reference);
        }

        #[test]
        fn right_identity_is_neutral((a, _b) in operands(), cutoff in 1usize..=4) {
            let id = Matrix::identity(a.rows());
            let c = strassen(&a, &id, cutoff).unwrap();
            prop_assert!(c.matches(&a).unwrap());
        }

        #[test]
        fn repeated_calls_agree((a, b) in operands()) {
            let mut engine = Strassen::with_cutoff(1).unwrap();
            let first = engine.multiply(&a, &b).unwrap();
            let second = engine.multiply(&a, &b).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn matches_rejects_any_single_change((a, _b) in operands(), delta in 1i64..1000) {
            let mut changed = a.clone();
            let n = a.rows();
            let v = changed.get(n - 1, 0);
            changed.set(n - 1, 0, v + delta);
            prop_assert!(!a.matches(&changed).unwrap());
        }
    }
}
