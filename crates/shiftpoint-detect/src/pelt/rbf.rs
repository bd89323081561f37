// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use super::backtrack;
use shiftpoint_core::{Breakpoints, Result, Signal};
use shiftpoint_costs::CostRbf;
use shiftpoint_kernels::Kernel;

/// PELT inner routine for the RBF cost, working directly in kernel space.
///
/// Two running accumulators avoid materialising the Gram matrix:
/// `diag_prefix[t] = Σ_{j<t} K(x_j, x_j)` and, for every candidate start
/// `s`, `segment_sums[s] = Σ_{s<=i<j<t} 2·K(x_i, x_j) - Σ_{s<=i<t} K(x_i, x_i)`
/// after processing `t` samples. The segment cost is then
/// `(diag_prefix[t] - diag_prefix[s]) - segment_sums[s] / (t - s)`,
/// amortised O(1) per candidate: extending `t` by one sample costs a
/// single pass summing `K(x_j, x_{t-1})` over the live candidates.
pub(crate) fn predict(
    cost: &CostRbf,
    signal: &Signal,
    min_size: usize,
    penalty: f64,
) -> Result<Breakpoints> {
    let kernel = cost.kernel()?;
    let n = signal.n_samples();

    let mut min_costs = vec![f64::INFINITY; n + 1];
    let mut best_prev = vec![0usize; n + 1];
    let mut pruning = vec![f64::INFINITY; n + 1];
    let mut diag_prefix = vec![0.0; n + 1];
    let mut segment_sums = vec![0.0; n + 1];
    min_costs[0] = -penalty;
    pruning[0] = 0.0;

    let mut first_candidate = 0usize;

    // Warm-up: while t < 2 * min_size the only admissible predecessor is 0,
    // so the accumulators advance without the candidate scan.
    let mut t = 1usize;
    while t < 2 * min_size && t <= n {
        let diag = kernel.compute(signal.row(t - 1), signal.row(t - 1))?;
        diag_prefix[t] = diag_prefix[t - 1] + diag;

        let mut cross_sum = 0.0;
        for s in (0..t).rev() {
            cross_sum += kernel.compute(signal.row(s), signal.row(t - 1))?;
            segment_sums[s] += 2.0 * cross_sum - diag;
        }

        if t >= min_size {
            let segment_cost = (diag_prefix[t] - diag_prefix[0]) - segment_sums[0] / t as f64;
            min_costs[t] = min_costs[0] + segment_cost + penalty;
            best_prev[t] = 0;
        }
        t += 1;
    }

    for t in (2 * min_size)..=n {
        let diag = kernel.compute(signal.row(t - 1), signal.row(t - 1))?;
        diag_prefix[t] = diag_prefix[t - 1] + diag;

        let mut cross_sum = 0.0;
        for s in (first_candidate..t).rev() {
            cross_sum += kernel.compute(signal.row(s), signal.row(t - 1))?;
            segment_sums[s] += 2.0 * cross_sum - diag;
        }

        min_costs[t] = f64::INFINITY;

        if first_candidate <= t - min_size {
            let start = first_candidate;
            let len = (t - start) as f64;
            let segment_cost = (diag_prefix[t] - diag_prefix[start]) - segment_sums[start] / len;
            pruning[start] = min_costs[start] + segment_cost;
            min_costs[t] = pruning[start] + penalty;
            best_prev[t] = start;
        }

        for start in (first_candidate + 1)..=(t - min_size) {
            let len = (t - start) as f64;
            let segment_cost = (diag_prefix[t] - diag_prefix[start]) - segment_sums[start] / len;
            pruning[start] = min_costs[start] + segment_cost;
            let total = pruning[start] + penalty;
            if total < min_costs[t] {
                min_costs[t] = total;
                best_prev[t] = start;
            }
        }

        while first_candidate <= t - min_size && pruning[first_candidate] >= min_costs[t] {
            if first_candidate == 0 {
                first_candidate = min_size;
            } else {
                first_candidate += 1;
            }
        }
    }

    Ok(backtrack(&best_prev, n))
}
