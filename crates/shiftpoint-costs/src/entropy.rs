// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::model::CostFunction;
use shiftpoint_core::{Error, Result, Signal, validate_segment};

/// Size of the discrete alphabet accepted by [`CostEntropy`].
pub const ALPHABET_SIZE: usize = 256;

/// Prefix-histogram cache: `(n + 1)` rows of `ALPHABET_SIZE` counters in
/// flat storage, with row 0 all zeros.
#[derive(Clone, Debug, PartialEq)]
struct EntropyCache {
    counts: Vec<u32>,
    n: usize,
}

impl EntropyCache {
    fn row_offset(&self, k: usize) -> usize {
        k * ALPHABET_SIZE
    }

    fn segment_count(&self, start: usize, end: usize, value: usize) -> u32 {
        self.counts[self.row_offset(end) + value] - self.counts[self.row_offset(start) + value]
    }
}

/// Shannon-entropy segment cost for univariate byte-valued signals.
///
/// Every sample must lie in `[0, 256)`. Prefix histograms make each
/// segment query O(A) with `A = 256`: the segment histogram is the
/// componentwise difference `H[end] - H[start]`, and the cost is
/// `L · Σ -p_v · log2(p_v)` over the non-zero bins.
#[derive(Clone, Debug)]
pub struct CostEntropy {
    cache: Option<EntropyCache>,
    min_size: usize,
}

impl CostEntropy {
    pub fn new() -> Self {
        Self {
            cache: None,
            min_size: 1,
        }
    }
}

impl Default for CostEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl CostFunction for CostEntropy {
    fn fit(&mut self, signal: &Signal) -> Result<()> {
        if !signal.is_univariate() {
            return Err(Error::invalid_signal(format!(
                "CostEntropy requires a univariate signal; got d={}",
                signal.n_features()
            )));
        }

        let n = signal.n_samples();
        let mut counts = vec![0u32; (n + 1) * ALPHABET_SIZE];

        for t in 0..n {
            let raw = signal.value(t, 0);
            if !(0.0..(ALPHABET_SIZE as f64)).contains(&raw) {
                return Err(Error::value_out_of_range(format!(
                    "CostEntropy: value {raw} at index {t} outside [0, {ALPHABET_SIZE})"
                )));
            }
            let value = raw as usize;

            let (prev, next) = counts[t * ALPHABET_SIZE..(t + 2) * ALPHABET_SIZE]
                .split_at_mut(ALPHABET_SIZE);
            next.copy_from_slice(prev);
            next[value] += 1;
        }

        self.cache = Some(EntropyCache { counts, n });
        Ok(())
    }

    fn error(&self, start: usize, end: usize) -> Result<f64> {
        let cache = self
            .cache
            .as_ref()
            .ok_or_else(|| Error::cost_not_fitted("CostEntropy: call fit() before error()"))?;

        validate_segment(cache.n, start, end)?;

        let segment_len = end - start;
        if segment_len < self.min_size {
            return Err(Error::not_enough_points(format!(
                "CostEntropy: segment [{start}, {end}) has {segment_len} points; minimum is {}",
                self.min_size
            )));
        }

        let len = segment_len as f64;
        let mut entropy = 0.0;
        for value in 0..ALPHABET_SIZE {
            let count = cache.segment_count(start, end, value);
            if count > 0 {
                let p = f64::from(count) / len;
                entropy -= p * p.log2();
            }
        }

        Ok((len * entropy).max(0.0))
    }

    fn model(&self) -> &'static str {
        "entropy"
    }

    fn min_size(&self) -> usize {
        self.min_size
    }
}
