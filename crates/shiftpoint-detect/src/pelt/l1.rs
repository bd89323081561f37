// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use super::optimal_partition;
use shiftpoint_core::{Breakpoints, Error, Result, Signal};

/// PELT inner routine for the L1 cost on univariate signals.
///
/// Each candidate segment sorts a scratch copy to find its median and sums
/// the absolute deviations, so a single cost query is O(L log L).
pub(crate) fn predict(signal: &Signal, min_size: usize, penalty: f64) -> Result<Breakpoints> {
    if !signal.is_univariate() {
        return Err(Error::invalid_signal(format!(
            "the optimised L1 PELT routine requires a univariate signal; got d={}",
            signal.n_features()
        )));
    }

    let values = signal.feature_column(0);
    let mut scratch: Vec<f64> = Vec::with_capacity(values.len());

    optimal_partition(values.len(), min_size, penalty, |start, end| {
        scratch.clear();
        scratch.extend_from_slice(&values[start..end]);
        scratch.sort_unstable_by(f64::total_cmp);

        let len = scratch.len();
        let median = if len % 2 == 0 {
            (scratch[len / 2 - 1] + scratch[len / 2]) / 2.0
        } else {
            scratch[len / 2]
        };

        Ok(scratch.iter().map(|v| (v - median).abs()).sum())
    })
}
