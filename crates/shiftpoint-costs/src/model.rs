// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::entropy::CostEntropy;
use crate::l1::CostL1;
use crate::l2::CostL2;
use crate::rbf::CostRbf;
use shiftpoint_core::{Result, Signal};

/// Shared contract for segment cost functions.
///
/// Segment conventions use half-open intervals `[start, end)`. A cost is
/// created unfitted; `fit` stores whatever the model pre-computes and
/// transitions it to the fitted state, after which `error` may be queried
/// repeatedly without further mutation.
pub trait CostFunction {
    /// Fits the cost to a signal, pre-computing internal caches.
    fn fit(&mut self, signal: &Signal) -> Result<()>;

    /// Returns the cost for segment `[start, end)`.
    ///
    /// Fails with `CostNotFitted` before `fit`, `SegmentOutOfBounds` for
    /// invalid indices and `NotEnoughPoints` for segments shorter than
    /// [`min_size`](CostFunction::min_size).
    fn error(&self, start: usize, end: usize) -> Result<f64>;

    /// Stable model name, e.g. `"l2"`.
    fn model(&self) -> &'static str;

    /// Minimum admissible segment length for this cost.
    fn min_size(&self) -> usize;
}

/// The closed set of cost models shipped with the library.
///
/// Detectors dispatch on the concrete variant to select their optimised
/// inner routine, so the set is deliberately an enum rather than a trait
/// object.
#[derive(Clone, Debug)]
pub enum Cost {
    L1(CostL1),
    L2(CostL2),
    Rbf(CostRbf),
    Entropy(CostEntropy),
}

impl CostFunction for Cost {
    fn fit(&mut self, signal: &Signal) -> Result<()> {
        match self {
            Cost::L1(cost) => cost.fit(signal),
            Cost::L2(cost) => cost.fit(signal),
            Cost::Rbf(cost) => cost.fit(signal),
            Cost::Entropy(cost) => cost.fit(signal),
        }
    }

    fn error(&self, start: usize, end: usize) -> Result<f64> {
        match self {
            Cost::L1(cost) => cost.error(start, end),
            Cost::L2(cost) => cost.error(start, end),
            Cost::Rbf(cost) => cost.error(start, end),
            Cost::Entropy(cost) => cost.error(start, end),
        }
    }

    fn model(&self) -> &'static str {
        match self {
            Cost::L1(cost) => cost.model(),
            Cost::L2(cost) => cost.model(),
            Cost::Rbf(cost) => cost.model(),
            Cost::Entropy(cost) => cost.model(),
        }
    }

    fn min_size(&self) -> usize {
        match self {
            Cost::L1(cost) => cost.min_size(),
            Cost::L2(cost) => cost.min_size(),
            Cost::Rbf(cost) => cost.min_size(),
            Cost::Entropy(cost) => cost.min_size(),
        }
    }
}

/// Total cost of the segmentation induced by `breakpoints`.
///
/// A leading `0` is implied, so `breakpoints = [b1, …, n]` describes the
/// segments `[0, b1), …, [b_{k-1}, n)`. Empty input yields `0.0`; the
/// first segment error encountered is propagated.
pub fn sum_of_costs<C: CostFunction + ?Sized>(cost: &C, breakpoints: &[usize]) -> Result<f64> {
    if breakpoints.is_empty() {
        return Ok(0.0);
    }

    let mut bounds = Vec::with_capacity(breakpoints.len() + 1);
    bounds.push(0usize);
    bounds.extend_from_slice(breakpoints);

    let mut sum = 0.0;
    for pair in bounds.windows(2) {
        sum += cost.error(pair[0], pair[1])?;
    }
    Ok(sum)
}
