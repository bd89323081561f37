// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::error::{Error, Result};

/// Sorted breakpoint indices; by convention the last element equals the
/// number of samples `n`, closing the final segment.
pub type Breakpoints = Vec<usize>;

/// An owned multivariate signal with C-contiguous row-major storage.
///
/// Shape is `(n, d)`: `n` samples, each a feature vector of width `d`.
/// Construction validates the shape once, so every `Signal` in circulation
/// is non-empty with a consistent feature dimension.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Signal {
    values: Vec<f64>,
    n: usize,
    d: usize,
}

impl Signal {
    /// Builds a signal from sample rows, validating width consistency.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::invalid_signal("signal has no samples"));
        }
        let d = rows[0].len();
        if d == 0 {
            return Err(Error::invalid_signal("signal has zero features"));
        }

        let mut values = Vec::with_capacity(rows.len() * d);
        for (t, row) in rows.iter().enumerate() {
            if row.len() != d {
                return Err(Error::invalid_signal(format!(
                    "inconsistent feature dimension at row {t}: got {}, want {d}",
                    row.len()
                )));
            }
            values.extend_from_slice(row);
        }

        Ok(Self {
            values,
            n: rows.len(),
            d,
        })
    }

    /// Builds a univariate (`d = 1`) signal from a value slice.
    pub fn from_univariate(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::invalid_signal("signal has no samples"));
        }
        Ok(Self {
            values: values.to_vec(),
            n: values.len(),
            d: 1,
        })
    }

    /// Builds a signal from flat row-major storage of shape `(n, d)`.
    pub fn from_flat(values: Vec<f64>, n: usize, d: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::invalid_signal("signal has no samples"));
        }
        if d == 0 {
            return Err(Error::invalid_signal("signal has zero features"));
        }
        if values.len() != n * d {
            return Err(Error::invalid_signal(format!(
                "flat storage length {} does not match shape ({n}, {d})",
                values.len()
            )));
        }
        Ok(Self { values, n, d })
    }

    /// Number of samples.
    pub fn n_samples(&self) -> usize {
        self.n
    }

    /// Number of features per sample.
    pub fn n_features(&self) -> usize {
        self.d
    }

    /// Whether the signal is univariate (`d == 1`).
    pub fn is_univariate(&self) -> bool {
        self.d == 1
    }

    /// The feature vector of sample `t`.
    ///
    /// Panics if `t >= n`, mirroring slice indexing.
    pub fn row(&self, t: usize) -> &[f64] {
        &self.values[t * self.d..(t + 1) * self.d]
    }

    /// A single value at `(t, dim)`.
    pub fn value(&self, t: usize, dim: usize) -> f64 {
        self.values[t * self.d + dim]
    }

    /// Copies out feature column `dim` across all samples.
    pub fn feature_column(&self, dim: usize) -> Vec<f64> {
        (0..self.n).map(|t| self.value(t, dim)).collect()
    }

    /// Flat row-major view of the full storage.
    pub fn as_flat(&self) -> &[f64] {
        &self.values
    }
}

/// Checks the half-open segment `[start, end)` against a signal of length `n`.
pub fn validate_segment(n: usize, start: usize, end: usize) -> Result<()> {
    if start >= end || end > n {
        return Err(Error::segment_out_of_bounds(format!(
            "segment [{start}, {end}) is invalid for signal length {n}"
        )));
    }
    Ok(())
}

/// A small owned row-major matrix used for squareform expansion and the
/// RBF Gram cache.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// An all-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.cols + j] = value;
    }

    /// Applies `f` to every element in place.
    pub fn map_in_place(&mut self, f: impl Fn(f64) -> f64) {
        for value in &mut self.data {
            *value = f(*value);
        }
    }
}

/// Validates the breakpoint conventions used by detectors: non-empty,
/// strictly increasing, every element in `(0, n]`, final element `n`.
pub fn validate_breakpoints(n: usize, breakpoints: &[usize]) -> Result<()> {
    if breakpoints.is_empty() {
        return Err(Error::invalid_signal(format!(
            "breakpoints must be non-empty and include n={n} as the final element"
        )));
    }

    let mut prev: Option<usize> = None;
    for (idx, &bp) in breakpoints.iter().enumerate() {
        if bp == 0 {
            return Err(Error::invalid_signal(format!(
                "breakpoints[{idx}] must be > 0; got 0"
            )));
        }
        if bp > n {
            return Err(Error::invalid_signal(format!(
                "breakpoints[{idx}] must be <= n; got breakpoint={bp}, n={n}"
            )));
        }
        if let Some(prev_bp) = prev {
            if bp <= prev_bp {
                return Err(Error::invalid_signal(format!(
                    "breakpoints must be strictly increasing: breakpoints[{idx}]={bp}, previous={prev_bp}"
                )));
            }
        }
        prev = Some(bp);
    }

    match breakpoints.last() {
        Some(&last) if last == n => Ok(()),
        Some(&last) => Err(Error::invalid_signal(format!(
            "breakpoints must include n as the final element: last={last}, n={n}"
        ))),
        None => unreachable!("checked non-empty above"),
    }
}

/// Converts validated breakpoints into contiguous `[start, end)` segments.
pub fn segments_from_breakpoints(breakpoints: &[usize]) -> Vec<(usize, usize)> {
    let mut segments = Vec::with_capacity(breakpoints.len());
    let mut start = 0usize;
    for &end in breakpoints {
        segments.push((start, end));
        start = end;
    }
    segments
}
