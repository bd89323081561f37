// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};
use shiftpoint_core::Signal;
use shiftpoint_costs::{Cost, CostFunction, new_cost, sum_of_costs};

fn fitted_cost(model: &str, values: &[f64]) -> Cost {
    let mut cost = new_cost(model).expect("registered model should construct");
    let signal =
        Signal::from_univariate(values).expect("generated test data should form a valid signal");
    cost.fit(&signal).expect("fit should succeed");
    cost
}

fn segment_bounds(n: usize, a: usize, b: usize, min_size: usize) -> (usize, usize) {
    let start = a.min(b) % n;
    let end = (start + min_size + (a.max(b) % n)).min(n);
    if end - start < min_size {
        (n - min_size, n)
    } else {
        (start, end)
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        max_shrink_iters: 512,
        failure_persistence: Some(Box::new(FileFailurePersistence::Direct(
            "proptest-regressions/tests/proptest_invariants.txt"
        ))),
        .. ProptestConfig::default()
    })]

    #[test]
    fn costs_are_non_negative_on_every_valid_segment(
        values in prop::collection::vec(0.0f64..256.0, 8..64),
        a in 0usize..1024,
        b in 0usize..1024,
    ) {
        let n = values.len();
        for model in ["l1", "l2", "rbf", "entropy"] {
            let cost = fitted_cost(model, &values);
            let (start, end) = segment_bounds(n, a, b, cost.min_size());
            let value = cost.error(start, end)
                .expect("valid segment should produce a cost");
            prop_assert!(
                value >= 0.0,
                "{model} cost for [{start}, {end}) is negative: {value}"
            );
            prop_assert!(value.is_finite());
        }
    }

    #[test]
    fn sum_of_costs_over_terminal_breakpoint_matches_full_error(
        values in prop::collection::vec(0.0f64..256.0, 4..48),
    ) {
        let n = values.len();
        for model in ["l1", "l2", "rbf", "entropy"] {
            let cost = fitted_cost(model, &values);
            let total = sum_of_costs(&cost, &[n]).expect("terminal partition should cost");
            let full = cost.error(0, n).expect("full segment should cost");
            prop_assert!(
                (total - full).abs() <= 1e-9,
                "{model}: sum_of_costs([n])={total} != error(0, n)={full}"
            );
        }
    }

    #[test]
    fn splitting_a_segment_never_increases_the_cost(
        values in prop::collection::vec(0.0f64..256.0, 8..48),
        split_seed in 0usize..1024,
    ) {
        // The pruning inequality PELT relies on:
        // cost(s, u) + cost(u, t) <= cost(s, t).
        let n = values.len();
        for model in ["l1", "l2", "entropy"] {
            let cost = fitted_cost(model, &values);
            let min_size = cost.min_size();
            if n < 2 * min_size {
                continue;
            }
            let split = min_size + split_seed % (n - 2 * min_size + 1);

            let whole = cost.error(0, n).expect("whole segment should cost");
            let left = cost.error(0, split).expect("left part should cost");
            let right = cost.error(split, n).expect("right part should cost");
            prop_assert!(
                left + right <= whole + 1e-7,
                "{model}: split at {split} increased cost: {left} + {right} > {whole}"
            );
        }
    }

    #[test]
    fn idempotent_error_queries(
        values in prop::collection::vec(0.0f64..256.0, 4..32),
    ) {
        let n = values.len();
        for model in ["l1", "l2", "rbf", "entropy"] {
            let cost = fitted_cost(model, &values);
            let start = if n > cost.min_size() { 1 } else { 0 };
            let end = n;
            let first = cost.error(start, end).expect("first query should cost");
            let second = cost.error(start, end).expect("second query should cost");
            prop_assert_eq!(first, second);
        }
    }
}
