// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::model::CostFunction;
use shiftpoint_core::stats::median;
use shiftpoint_core::{Error, Result, Signal, validate_segment};

/// L1 (least-absolute-deviation) segment cost around the per-feature
/// median.
///
/// More robust to outliers than [`CostL2`](crate::l2::CostL2); in exchange
/// each query recomputes the segment median, so the per-segment complexity
/// is O(m log m) rather than a prefix-stat lookup.
#[derive(Clone, Debug)]
pub struct CostL1 {
    signal: Option<Signal>,
    min_size: usize,
}

impl CostL1 {
    pub fn new() -> Self {
        Self {
            signal: None,
            min_size: 2,
        }
    }
}

impl Default for CostL1 {
    fn default() -> Self {
        Self::new()
    }
}

impl CostFunction for CostL1 {
    fn fit(&mut self, signal: &Signal) -> Result<()> {
        self.signal = Some(signal.clone());
        Ok(())
    }

    fn error(&self, start: usize, end: usize) -> Result<f64> {
        let signal = self
            .signal
            .as_ref()
            .ok_or_else(|| Error::cost_not_fitted("CostL1: call fit() before error()"))?;

        validate_segment(signal.n_samples(), start, end)?;

        let segment_len = end - start;
        if segment_len < self.min_size {
            return Err(Error::not_enough_points(format!(
                "CostL1: segment [{start}, {end}) has {segment_len} points; minimum is {}",
                self.min_size
            )));
        }

        let mut scratch = Vec::with_capacity(segment_len);
        let mut total = 0.0;

        for dim in 0..signal.n_features() {
            scratch.clear();
            for t in start..end {
                scratch.push(signal.value(t, dim));
            }

            let m = median(&scratch)?;
            total += scratch.iter().map(|v| (v - m).abs()).sum::<f64>();
        }

        Ok(total.max(0.0))
    }

    fn model(&self) -> &'static str {
        "l1"
    }

    fn min_size(&self) -> usize {
        self.min_size
    }
}

#[cfg(test)]
mod tests {
    use super::CostL1;
    use crate::model::CostFunction;
    use shiftpoint_core::{Error, Signal};

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff <= tol,
            "expected {expected}, got {actual}, |diff|={diff}, tol={tol}"
        );
    }

    fn fitted(rows: &[Vec<f64>]) -> CostL1 {
        let mut cost = CostL1::new();
        cost.fit(&Signal::from_rows(rows).unwrap())
            .expect("fit should succeed");
        cost
    }

    #[test]
    fn trait_contract() {
        let cost = CostL1::new();
        assert_eq!(cost.model(), "l1");
        assert_eq!(cost.min_size(), 2);
    }

    #[test]
    fn known_answer_odd_length() {
        // [1..5]: median 3, deviations 2+1+0+1+2 = 6.
        let cost = fitted(&[vec![1.0], vec![2.0], vec![3.0], vec![4.0], vec![5.0]]);
        assert_close(cost.error(0, 5).unwrap(), 6.0, 1e-9);
    }

    #[test]
    fn known_answer_even_length() {
        // [1..4]: median 2.5, deviations 1.5+0.5+0.5+1.5 = 4.
        let cost = fitted(&[vec![1.0], vec![2.0], vec![3.0], vec![4.0]]);
        assert_close(cost.error(0, 4).unwrap(), 4.0, 1e-9);
    }

    #[test]
    fn length_two_segment_equals_absolute_difference() {
        let cost = fitted(&[vec![1.5], vec![4.0], vec![9.0]]);
        assert_close(cost.error(0, 2).unwrap(), 2.5, 1e-12);
        assert_close(cost.error(1, 3).unwrap(), 5.0, 1e-12);
    }

    #[test]
    fn negative_and_mixed_values() {
        let negative = fitted(&[vec![-1.0], vec![-2.0], vec![-3.0]]);
        assert_close(negative.error(0, 3).unwrap(), 2.0, 1e-9);

        let mixed = fitted(&[vec![-10.0], vec![0.0], vec![5.0], vec![-5.0]]);
        assert_close(mixed.error(0, 4).unwrap(), 20.0, 1e-9);
    }

    #[test]
    fn multivariate_sums_per_feature_deviations() {
        // Columns (1,2,3) and (10,20,30): deviations 2 and 20.
        let cost = fitted(&[vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0, 30.0]]);
        assert_close(cost.error(0, 3).unwrap(), 22.0, 1e-9);
    }

    #[test]
    fn constant_segment_costs_zero() {
        let cost = fitted(&[vec![0.0, 0.0], vec![0.0, 0.0]]);
        assert_close(cost.error(0, 2).unwrap(), 0.0, 1e-12);
    }

    #[test]
    fn single_point_segment_is_rejected() {
        let cost = fitted(&[vec![7.0], vec![8.0]]);
        let err = cost.error(0, 1).expect_err("min_size=2 must reject length 1");
        assert!(matches!(err, Error::NotEnoughPoints(_)));
    }

    #[test]
    fn invalid_segments_are_rejected() {
        let cost = fitted(&[vec![1.0], vec![2.0], vec![3.0]]);
        for (start, end) in [(0usize, 4usize), (2, 2), (3, 2)] {
            let err = cost
                .error(start, end)
                .expect_err("invalid segment must fail");
            assert!(matches!(err, Error::SegmentOutOfBounds(_)));
        }
    }

    #[test]
    fn error_before_fit_is_rejected() {
        let cost = CostL1::new();
        let err = cost.error(0, 2).expect_err("unfitted cost must fail");
        assert!(matches!(err, Error::CostNotFitted(_)));
    }
}
