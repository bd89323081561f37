// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

/// Returns prefix sums with length `n + 1` and `prefix[0] = 0.0`, so the
/// segment sum over `[start, end)` is `prefix[end] - prefix[start]`.
pub fn prefix_sums(values: &[f64]) -> Vec<f64> {
    let mut prefix = Vec::with_capacity(values.len() + 1);
    prefix.push(0.0);

    let mut sum = 0.0;
    for &value in values {
        sum += value;
        prefix.push(sum);
    }

    prefix
}

/// Returns prefix sums of squares with length `n + 1` and `prefix[0] = 0.0`.
pub fn prefix_sum_squares(values: &[f64]) -> Vec<f64> {
    let mut prefix = Vec::with_capacity(values.len() + 1);
    prefix.push(0.0);

    let mut sum = 0.0;
    for &value in values {
        sum += value * value;
        prefix.push(sum);
    }

    prefix
}

#[cfg(test)]
mod tests {
    use super::{prefix_sum_squares, prefix_sums};

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff <= tol,
            "expected {expected}, got {actual}, |diff|={diff}, tol={tol}"
        );
    }

    #[test]
    fn prefix_helpers_shape_and_empty_behavior() {
        assert_eq!(prefix_sums(&[]), vec![0.0]);
        assert_eq!(prefix_sum_squares(&[]), vec![0.0]);

        let values = [1.0, -2.0, 3.0];
        let prefix = prefix_sums(&values);
        let prefix_sq = prefix_sum_squares(&values);
        assert_eq!(prefix.len(), values.len() + 1);
        assert_eq!(prefix_sq.len(), values.len() + 1);
        assert_eq!(prefix[0], 0.0);
        assert_eq!(prefix_sq[0], 0.0);
    }

    #[test]
    fn prefix_helpers_match_segment_identities() {
        let values = [-2.0, 0.5, 1.25, -3.5, 7.0, 4.75];
        let prefix = prefix_sums(&values);
        let prefix_sq = prefix_sum_squares(&values);

        for start in 0..=values.len() {
            for end in start..=values.len() {
                let expected_sum: f64 = values[start..end].iter().sum();
                let actual_sum = prefix[end] - prefix[start];
                assert_close(actual_sum, expected_sum, 1e-12);

                let expected_sq_sum: f64 = values[start..end].iter().map(|x| x * x).sum();
                let actual_sq_sum = prefix_sq[end] - prefix_sq[start];
                assert_close(actual_sq_sum, expected_sq_sum, 1e-12);
            }
        }
    }
}
