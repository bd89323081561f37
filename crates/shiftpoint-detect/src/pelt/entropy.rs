// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use super::optimal_partition;
use shiftpoint_core::{Breakpoints, Error, Result, Signal};
use shiftpoint_costs::{CostEntropy, CostFunction};

/// PELT inner routine for the entropy cost.
///
/// Delegates each segment query to the fitted cost, which answers in O(A)
/// from its prefix histograms.
pub(crate) fn predict(
    cost: &CostEntropy,
    signal: &Signal,
    min_size: usize,
    penalty: f64,
) -> Result<Breakpoints> {
    if !signal.is_univariate() {
        return Err(Error::invalid_signal(format!(
            "the optimised entropy PELT routine requires a univariate signal; got d={}",
            signal.n_features()
        )));
    }

    optimal_partition(signal.n_samples(), min_size, penalty, |start, end| {
        cost.error(start, end)
    })
}
