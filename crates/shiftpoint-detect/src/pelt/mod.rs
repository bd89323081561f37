// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

mod entropy;
mod l1;
mod l2;
mod rbf;

use shiftpoint_core::{Breakpoints, Error, Result, Signal};
use shiftpoint_costs::{Cost, CostFunction};

/// Penalised exact change-point detector (PELT, Killick et al. 2012).
///
/// The detector owns a [`Cost`] and, once fitted, the signal. `predict`
/// dispatches on the concrete cost variant to an optimised inner routine:
/// segment medians for L1, prefix sums for L2, incremental kernel-space
/// accumulators for RBF and prefix-histogram differencing for entropy.
///
/// `predict` is read-only on fitted state: all per-call scratch is
/// allocated fresh, so repeated calls with the same penalty return
/// identical results and distinct instances may run concurrently.
#[derive(Clone, Debug)]
pub struct Pelt {
    cost: Cost,
    min_size: usize,
    jump: usize,
    signal: Option<Signal>,
}

impl Pelt {
    /// Creates a detector for `cost` with a minimum segment length and a
    /// candidate subsampling step.
    ///
    /// Fails with `InvalidMinSize` when `min_size < 1` and `NotSupported`
    /// when `jump < 1`. Only `jump = 1` is accepted by `predict`; the
    /// parameter is kept for interface compatibility.
    pub fn new(cost: Cost, min_size: usize, jump: usize) -> Result<Self> {
        if min_size < 1 {
            return Err(Error::invalid_min_size(format!(
                "Pelt requires min_size >= 1; got {min_size}"
            )));
        }
        if jump < 1 {
            return Err(Error::not_supported(format!(
                "Pelt requires jump >= 1; got {jump}"
            )));
        }
        Ok(Self {
            cost,
            min_size,
            jump,
            signal: None,
        })
    }

    pub fn cost(&self) -> &Cost {
        &self.cost
    }

    pub fn min_size(&self) -> usize {
        self.min_size
    }

    pub fn jump(&self) -> usize {
        self.jump
    }

    /// Stores the signal and fits the cost, transitioning the detector to
    /// the fitted state.
    pub fn fit(&mut self, signal: Signal) -> Result<()> {
        self.cost.fit(&signal)?;
        self.signal = Some(signal);
        Ok(())
    }

    /// Returns the optimal breakpoints for the fitted signal under the
    /// given penalty. The result ends in `n`; every segment it induces has
    /// at least `max(min_size, cost.min_size())` samples.
    pub fn predict(&self, penalty: f64) -> Result<Breakpoints> {
        let signal = self
            .signal
            .as_ref()
            .ok_or_else(|| Error::not_fitted("Pelt: call fit() before predict()"))?;

        if !(penalty > 0.0) {
            return Err(Error::invalid_penalty(format!(
                "penalty must be > 0; got {penalty}"
            )));
        }
        if self.jump != 1 {
            return Err(Error::not_supported(format!(
                "the optimised PELT routines support jump = 1 only; got {}",
                self.jump
            )));
        }

        let min_size = self.min_size.max(self.cost.min_size());
        let n = signal.n_samples();
        if min_size > n {
            return Err(Error::not_enough_points(format!(
                "signal of length {n} cannot hold a segment of min_size {min_size}"
            )));
        }

        match &self.cost {
            Cost::L1(_) => l1::predict(signal, min_size, penalty),
            Cost::L2(_) => l2::predict(signal, min_size, penalty),
            Cost::Rbf(cost) => rbf::predict(cost, signal, min_size, penalty),
            Cost::Entropy(cost) => entropy::predict(cost, signal, min_size, penalty),
        }
    }

    /// Fits the signal and immediately predicts with `penalty`.
    pub fn fit_predict(&mut self, signal: Signal, penalty: f64) -> Result<Breakpoints> {
        self.fit(signal)?;
        self.predict(penalty)
    }
}

/// The PELT dynamic program over an arbitrary segment-cost oracle.
///
/// `min_costs[t]` is the minimum penalised cost of partitioning the length-`t`
/// prefix, seeded with `min_costs[0] = -penalty` so that a partition with
/// `k` segments accumulates exactly `(k - 1) * penalty`. Candidates are
/// pruned through a moving lower bound: a start `s` whose best extension
/// already exceeds `min_costs[t]` can never become optimal again (the costs
/// in this crate satisfy `cost(s, u) + cost(u, t) <= cost(s, t)`), and when
/// the bound leaves `0` it jumps straight to `min_size` because no start in
/// between can head a valid first segment.
///
/// Ties between candidate starts resolve to the earliest index: the first
/// surviving candidate assigns unconditionally and later ones must win a
/// strict comparison.
pub(crate) fn optimal_partition<F>(
    n: usize,
    min_size: usize,
    penalty: f64,
    mut segment_cost: F,
) -> Result<Breakpoints>
where
    F: FnMut(usize, usize) -> Result<f64>,
{
    let mut min_costs = vec![f64::INFINITY; n + 1];
    let mut best_prev = vec![0usize; n + 1];
    let mut pruning = vec![f64::INFINITY; n + 1];
    min_costs[0] = -penalty;
    pruning[0] = 0.0;

    let mut first_candidate = 0usize;

    for end in min_size..=n {
        if first_candidate <= end - min_size {
            let start = first_candidate;
            let cost = segment_cost(start, end)?;
            pruning[start] = min_costs[start] + cost;
            min_costs[end] = pruning[start] + penalty;
            best_prev[end] = start;
        }

        for start in (first_candidate + 1)..=(end - min_size) {
            let cost = segment_cost(start, end)?;
            pruning[start] = min_costs[start] + cost;
            let total = pruning[start] + penalty;
            if total < min_costs[end] {
                min_costs[end] = total;
                best_prev[end] = start;
            }
        }

        while first_candidate <= end - min_size && pruning[first_candidate] >= min_costs[end] {
            if first_candidate == 0 {
                first_candidate = min_size;
            } else {
                first_candidate += 1;
            }
        }
    }

    Ok(backtrack(&best_prev, n))
}

/// Walks the predecessor chain from `n` back to `0`, collecting the
/// interior change points, and returns them sorted with the terminal `n`.
pub(crate) fn backtrack(best_prev: &[usize], n: usize) -> Breakpoints {
    let mut breakpoints = vec![n];
    let mut current = n;
    while current != 0 {
        current = best_prev[current];
        if current != 0 {
            breakpoints.push(current);
        }
    }
    breakpoints.sort_unstable();
    breakpoints
}

#[cfg(test)]
mod tests {
    use super::{backtrack, optimal_partition};

    #[test]
    fn backtrack_collects_and_sorts_interior_points() {
        // Chain 6 -> 4 -> 2 -> 0.
        let best_prev = vec![0, 0, 0, 0, 2, 0, 4];
        assert_eq!(backtrack(&best_prev, 6), vec![2, 4, 6]);
    }

    #[test]
    fn backtrack_with_no_predecessors_returns_terminal_only() {
        let best_prev = vec![0, 0, 0, 0];
        assert_eq!(backtrack(&best_prev, 3), vec![3]);
    }

    #[test]
    fn single_segment_when_penalty_dominates() {
        // Constant zero cost: any split only adds penalty.
        let breakpoints =
            optimal_partition(8, 1, 1.0, |_, _| Ok(0.0)).expect("solve should succeed");
        assert_eq!(breakpoints, vec![8]);
    }

    #[test]
    fn splits_when_segment_cost_is_superlinear() {
        // cost(len) = len², so splitting pays once the saving exceeds the
        // penalty. With penalty 1.5 the all-singleton partition
        // (8 * 1 + 7 * 1.5 = 18.5) is the strict optimum.
        let breakpoints = optimal_partition(8, 1, 1.5, |start, end| {
            let len = (end - start) as f64;
            Ok(len * len)
        })
        .expect("solve should succeed");

        assert_eq!(breakpoints, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn min_size_bounds_every_segment() {
        let breakpoints = optimal_partition(9, 3, 0.5, |start, end| {
            let len = (end - start) as f64;
            Ok(len * len)
        })
        .expect("solve should succeed");

        let mut start = 0usize;
        for &end in &breakpoints {
            assert!(end - start >= 3, "segment [{start}, {end}) under min_size");
            start = end;
        }
        assert_eq!(breakpoints.last(), Some(&9));
    }

    #[test]
    fn cost_oracle_errors_abort_the_solve() {
        let result = optimal_partition(4, 1, 1.0, |start, _| {
            if start == 2 {
                Err(shiftpoint_core::Error::not_enough_points("synthetic"))
            } else {
                Ok(0.0)
            }
        });
        assert!(result.is_err());
    }
}
