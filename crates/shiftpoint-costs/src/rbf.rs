// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::model::CostFunction;
use shiftpoint_core::linalg::{
    clip_slice, diagonal_sum, matrix_sum, pdist_sq_euclidean, squareform,
};
use shiftpoint_core::stats::median;
use shiftpoint_core::{Error, Matrix, Result, Signal, validate_segment};
use shiftpoint_kernels::{GAUSSIAN_CLIP_HIGH, GAUSSIAN_CLIP_LOW, GaussianKernel};
use std::sync::OnceLock;

/// Kernelised segment cost over a Gaussian Gram matrix.
///
/// For a segment `[s, e)` the cost is
/// `tr(G[s:e, s:e]) - sum(G[s:e, s:e]) / (e - s)`, i.e. the segment length
/// minus the squared norm of the empirical kernel mean.
///
/// The Gram matrix and the bandwidth `gamma` are resolved lazily on first
/// use and then shared read-only; `fit` resets both caches. When no
/// explicit `gamma` is given, the median heuristic over pairwise squared
/// distances is applied.
#[derive(Debug)]
pub struct CostRbf {
    signal: Option<Signal>,
    explicit_gamma: Option<f64>,
    resolved_gamma: OnceLock<f64>,
    gram: OnceLock<Matrix>,
    min_size: usize,
}

impl Default for CostRbf {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Clone for CostRbf {
    fn clone(&self) -> Self {
        let resolved_gamma = OnceLock::new();
        if let Some(gamma) = self.resolved_gamma.get() {
            let _ = resolved_gamma.set(*gamma);
        }
        let gram = OnceLock::new();
        if let Some(matrix) = self.gram.get() {
            let _ = gram.set(matrix.clone());
        }
        Self {
            signal: self.signal.clone(),
            explicit_gamma: self.explicit_gamma,
            resolved_gamma,
            gram,
            min_size: self.min_size,
        }
    }
}

impl CostRbf {
    /// Creates an RBF cost; `gamma = None` selects the median heuristic.
    pub fn new(gamma: Option<f64>) -> Self {
        Self {
            signal: None,
            explicit_gamma: gamma,
            resolved_gamma: OnceLock::new(),
            gram: OnceLock::new(),
            min_size: 1,
        }
    }

    fn fitted_signal(&self) -> Result<&Signal> {
        self.signal
            .as_ref()
            .ok_or_else(|| Error::cost_not_fitted("CostRbf: call fit() before error()"))
    }

    /// The effective Gaussian bandwidth, resolving the median heuristic on
    /// first use: `1 / median(D)` over pairwise squared distances when the
    /// median is non-zero, `1.0` otherwise (and for signals with fewer
    /// than two samples).
    pub fn gamma(&self) -> Result<f64> {
        if let Some(gamma) = self.explicit_gamma {
            return Ok(gamma);
        }
        if let Some(gamma) = self.resolved_gamma.get() {
            return Ok(*gamma);
        }

        let signal = self.fitted_signal()?;
        let gamma = if signal.n_samples() < 2 {
            1.0
        } else {
            let distances = pdist_sq_euclidean(signal);
            let median_distance = median(&distances)?;
            if median_distance != 0.0 {
                1.0 / median_distance
            } else {
                1.0
            }
        };

        Ok(*self.resolved_gamma.get_or_init(|| gamma))
    }

    /// The Gaussian kernel with the resolved bandwidth, used by the PELT
    /// inner loop.
    pub fn kernel(&self) -> Result<GaussianKernel> {
        Ok(GaussianKernel::new(self.gamma()?))
    }

    /// The `n × n` Gram matrix over the fitted signal, computed at most
    /// once per fit.
    ///
    /// Assembly: condensed squared distances, scaled by gamma and clipped
    /// into `[1e-2, 1e2]`, expanded to square form (zero diagonal), then
    /// `exp(-·)` elementwise, leaving `1.0` on the diagonal.
    pub fn gram(&self) -> Result<&Matrix> {
        if let Some(matrix) = self.gram.get() {
            return Ok(matrix);
        }
        let matrix = self.compute_gram()?;
        Ok(self.gram.get_or_init(|| matrix))
    }

    /// Replaces the cached Gram matrix, bypassing assembly. Intended for
    /// tests that pin an exact matrix.
    pub fn set_gram(&mut self, gram: Matrix) {
        let lock = OnceLock::new();
        let _ = lock.set(gram);
        self.gram = lock;
    }

    fn compute_gram(&self) -> Result<Matrix> {
        let signal = self.fitted_signal()?;
        let gamma = self.gamma()?;

        let mut distances = pdist_sq_euclidean(signal);
        for value in &mut distances {
            *value *= gamma;
        }
        clip_slice(&mut distances, GAUSSIAN_CLIP_LOW, GAUSSIAN_CLIP_HIGH);

        let mut matrix = squareform(&distances, signal.n_samples())?;
        matrix.map_in_place(|v| (-v).exp());
        Ok(matrix)
    }
}

impl CostFunction for CostRbf {
    fn fit(&mut self, signal: &Signal) -> Result<()> {
        self.signal = Some(signal.clone());
        self.resolved_gamma = OnceLock::new();
        self.gram = OnceLock::new();
        Ok(())
    }

    fn error(&self, start: usize, end: usize) -> Result<f64> {
        let signal = self.fitted_signal()?;

        validate_segment(signal.n_samples(), start, end)?;

        let segment_len = end - start;
        if segment_len < self.min_size {
            return Err(Error::not_enough_points(format!(
                "CostRbf: segment [{start}, {end}) has {segment_len} points; minimum is {}",
                self.min_size
            )));
        }

        let gram = self.gram()?;

        let mut sub_gram = Matrix::zeros(segment_len, segment_len);
        for i in 0..segment_len {
            for j in 0..segment_len {
                sub_gram.set(i, j, gram.get(start + i, start + j));
            }
        }

        let diag = diagonal_sum(&sub_gram)?;
        let total = matrix_sum(&sub_gram)?;

        Ok((diag - total / segment_len as f64).max(0.0))
    }

    fn model(&self) -> &'static str {
        "rbf"
    }

    fn min_size(&self) -> usize {
        self.min_size
    }
}
