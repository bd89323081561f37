// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use super::optimal_partition;
use shiftpoint_core::numerics::{prefix_sum_squares, prefix_sums};
use shiftpoint_core::{Breakpoints, Error, Result, Signal};

/// PELT inner routine for the L2 cost on univariate signals.
///
/// Prefix sums and prefix sums of squares turn each segment cost into the
/// O(1) lookup `sumsq - sum² / len`.
pub(crate) fn predict(signal: &Signal, min_size: usize, penalty: f64) -> Result<Breakpoints> {
    if !signal.is_univariate() {
        return Err(Error::invalid_signal(format!(
            "the optimised L2 PELT routine requires a univariate signal; got d={}",
            signal.n_features()
        )));
    }

    let values = signal.feature_column(0);
    let prefix = prefix_sums(&values);
    let prefix_sq = prefix_sum_squares(&values);

    optimal_partition(values.len(), min_size, penalty, |start, end| {
        let len = (end - start) as f64;
        let sum = prefix[end] - prefix[start];
        let sum_sq = prefix_sq[end] - prefix_sq[start];
        Ok((sum_sq - sum * sum / len).max(0.0))
    })
}
