// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::error::{Error, Result};
use crate::signal::{Matrix, Signal};

/// Dot product of two equal-length vectors.
pub fn dot(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::dimension_mismatch(format!(
            "dot product requires equal lengths; got {} and {}",
            x.len(),
            y.len()
        )));
    }
    Ok(x.iter().zip(y).map(|(a, b)| a * b).sum())
}

/// Squared Euclidean distance between two equal-length vectors.
pub fn squared_euclidean_distance(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::dimension_mismatch(format!(
            "squared Euclidean distance requires equal lengths; got {} and {}",
            x.len(),
            y.len()
        )));
    }
    Ok(x.iter()
        .zip(y)
        .map(|(a, b)| {
            let diff = a - b;
            diff * diff
        })
        .sum())
}

/// Euclidean (L2) norm of a vector. The empty vector has norm `0.0`.
pub fn vector_norm(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// Pairwise squared Euclidean distances between the samples of a signal,
/// returned in condensed upper-triangular order:
/// `(0,1), (0,2), …, (0,n-1), (1,2), …, (n-2,n-1)`.
///
/// Signals with fewer than two samples produce an empty vector.
pub fn pdist_sq_euclidean(signal: &Signal) -> Vec<f64> {
    let n = signal.n_samples();
    if n < 2 {
        return Vec::new();
    }

    let mut distances = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        let row_i = signal.row(i);
        for j in (i + 1)..n {
            let row_j = signal.row(j);
            let mut sum_sq = 0.0;
            for (a, b) in row_i.iter().zip(row_j) {
                let diff = a - b;
                sum_sq += diff * diff;
            }
            distances.push(sum_sq);
        }
    }
    distances
}

/// Expands a condensed distance vector into a symmetric `n × n` matrix
/// with zero diagonal.
///
/// Fails with `InconsistentShape` when the condensed length does not match
/// `n(n-1)/2`.
pub fn squareform(distances: &[f64], n: usize) -> Result<Matrix> {
    let expected_len = n * (n - 1) / 2;
    if distances.len() != expected_len {
        return Err(Error::inconsistent_shape(format!(
            "condensed length {} does not match n={n} (expected {expected_len})",
            distances.len()
        )));
    }

    let mut matrix = Matrix::zeros(n, n);
    let mut k = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            matrix.set(i, j, distances[k]);
            matrix.set(j, i, distances[k]);
            k += 1;
        }
    }
    Ok(matrix)
}

/// Clamps every element of `data` into `[lo, hi]` in place.
pub fn clip_slice(data: &mut [f64], lo: f64, hi: f64) {
    for value in data {
        *value = value.clamp(lo, hi);
    }
}

/// Sum of the main-diagonal elements of a square matrix.
///
/// Fails with `InconsistentShape` for empty or non-square input.
pub fn diagonal_sum(matrix: &Matrix) -> Result<f64> {
    if matrix.rows() == 0 {
        return Err(Error::inconsistent_shape("empty matrix for diagonal sum"));
    }
    if !matrix.is_square() {
        return Err(Error::inconsistent_shape(format!(
            "diagonal sum requires a square matrix; got {}x{}",
            matrix.rows(),
            matrix.cols()
        )));
    }

    Ok((0..matrix.rows()).map(|i| matrix.get(i, i)).sum())
}

/// Sum of all elements of a matrix.
///
/// Fails with `InconsistentShape` for empty input.
pub fn matrix_sum(matrix: &Matrix) -> Result<f64> {
    if matrix.rows() == 0 || matrix.cols() == 0 {
        return Err(Error::inconsistent_shape("empty matrix for sum"));
    }

    let mut sum = 0.0;
    for i in 0..matrix.rows() {
        for j in 0..matrix.cols() {
            sum += matrix.get(i, j);
        }
    }
    Ok(sum)
}
