// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::error::{Error, Result};

/// Arithmetic mean of `values`.
///
/// Empty input fails with `NotEnoughPoints`.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::not_enough_points("empty input for mean"));
    }
    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}

/// Median of `values`, computed on a sorted copy; the input is never
/// mutated. Even-length input returns the mean of the two middle elements.
///
/// Empty input fails with `NotEnoughPoints`.
pub fn median(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::not_enough_points("empty input for median"));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Population variance (`Σ(x - μ)² / n`) with compensated accumulation on
/// the squared residuals. Any negative round-off artifact is clamped to
/// `0.0`.
///
/// Empty input fails with `NotEnoughPoints`.
pub fn variance(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::not_enough_points("empty input for variance"));
    }

    let mu = mean(values)?;

    let mut sum_sq = 0.0;
    let mut c = 0.0;
    for &value in values {
        let diff = value - mu;
        let term = diff * diff;

        let y = term - c;
        let t = sum_sq + y;
        c = (t - sum_sq) - y;
        sum_sq = t;
    }

    let variance = sum_sq / values.len() as f64;
    Ok(if variance <= 0.0 { 0.0 } else { variance })
}
