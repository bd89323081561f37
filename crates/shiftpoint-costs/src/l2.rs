// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::model::CostFunction;
use shiftpoint_core::stats::variance;
use shiftpoint_core::{Error, Result, Signal, validate_segment};

/// L2 (least-squares) segment cost: `(end - start) · Σ_f var_f`, the
/// within-segment sum of squared deviations from the per-feature mean.
#[derive(Clone, Debug)]
pub struct CostL2 {
    signal: Option<Signal>,
    min_size: usize,
}

impl CostL2 {
    pub fn new() -> Self {
        Self {
            signal: None,
            min_size: 1,
        }
    }
}

impl Default for CostL2 {
    fn default() -> Self {
        Self::new()
    }
}

impl CostFunction for CostL2 {
    fn fit(&mut self, signal: &Signal) -> Result<()> {
        self.signal = Some(signal.clone());
        Ok(())
    }

    fn error(&self, start: usize, end: usize) -> Result<f64> {
        let signal = self
            .signal
            .as_ref()
            .ok_or_else(|| Error::cost_not_fitted("CostL2: call fit() before error()"))?;

        validate_segment(signal.n_samples(), start, end)?;

        let segment_len = end - start;
        if segment_len < self.min_size {
            return Err(Error::not_enough_points(format!(
                "CostL2: segment [{start}, {end}) has {segment_len} points; minimum is {}",
                self.min_size
            )));
        }

        let mut scratch = Vec::with_capacity(segment_len);
        let mut variance_sum = 0.0;

        for dim in 0..signal.n_features() {
            scratch.clear();
            for t in start..end {
                scratch.push(signal.value(t, dim));
            }
            variance_sum += variance(&scratch)?;
        }

        Ok((variance_sum * segment_len as f64).max(0.0))
    }

    fn model(&self) -> &'static str {
        "l2"
    }

    fn min_size(&self) -> usize {
        self.min_size
    }
}
