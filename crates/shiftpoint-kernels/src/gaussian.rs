// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::Kernel;
use shiftpoint_core::Result;
use shiftpoint_core::linalg::squared_euclidean_distance;

/// Lower clip bound for the Gaussian exponent `gamma * ‖x - y‖²`.
///
/// Zero-distance pairs therefore evaluate to `exp(-0.01)`, not `1.0`.
pub const GAUSSIAN_CLIP_LOW: f64 = 1e-2;

/// Upper clip bound for the Gaussian exponent.
pub const GAUSSIAN_CLIP_HIGH: f64 = 1e2;

/// Gaussian (RBF) kernel `K(x, y) = exp(-clip(gamma · ‖x - y‖², 1e-2, 1e2))`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussianKernel {
    gamma: f64,
}

impl GaussianKernel {
    /// Creates a Gaussian kernel with an explicit bandwidth.
    ///
    /// Callers that want the median heuristic resolve gamma from the data
    /// first (see the RBF cost) and pass the result here.
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Kernel for GaussianKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        let squared_distance = squared_euclidean_distance(x, y)?;
        let exponent = (self.gamma * squared_distance).clamp(GAUSSIAN_CLIP_LOW, GAUSSIAN_CLIP_HIGH);
        Ok((-exponent).exp())
    }

    fn name(&self) -> &'static str {
        "gaussian"
    }
}

#[cfg(test)]
mod tests {
    use super::{GAUSSIAN_CLIP_HIGH, GAUSSIAN_CLIP_LOW, GaussianKernel};
    use crate::Kernel;
    use shiftpoint_core::Error;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff <= tol,
            "expected {expected}, got {actual}, |diff|={diff}, tol={tol}"
        );
    }

    #[test]
    fn zero_distance_hits_the_lower_clip() {
        let kernel = GaussianKernel::new(1.0);
        let value = kernel.compute(&[2.0, 3.0], &[2.0, 3.0]).unwrap();
        assert_close(value, (-GAUSSIAN_CLIP_LOW).exp(), 1e-15);
        assert!(value < 1.0);
    }

    #[test]
    fn large_distance_hits_the_upper_clip() {
        let kernel = GaussianKernel::new(1.0);
        let value = kernel.compute(&[0.0], &[1000.0]).unwrap();
        assert_close(value, (-GAUSSIAN_CLIP_HIGH).exp(), 1e-45);
    }

    #[test]
    fn mid_range_exponent_is_untouched() {
        // gamma=1, distance²=1: exponent 1.0 sits inside [1e-2, 1e2].
        let kernel = GaussianKernel::new(1.0);
        let value = kernel.compute(&[0.0], &[1.0]).unwrap();
        assert_close(value, (-1.0_f64).exp(), 1e-15);
        assert_eq!(kernel.name(), "gaussian");
        assert_eq!(kernel.gamma(), 1.0);
    }

    #[test]
    fn gamma_scales_the_exponent() {
        let kernel = GaussianKernel::new(0.5);
        let value = kernel.compute(&[0.0], &[2.0]).unwrap();
        assert_close(value, (-2.0_f64).exp(), 1e-15);
    }

    #[test]
    fn rejects_mismatched_dimensions() {
        let kernel = GaussianKernel::new(1.0);
        let err = kernel
            .compute(&[1.0], &[1.0, 2.0])
            .expect_err("length mismatch must fail");
        assert!(matches!(err, Error::DimensionMismatch(_)));
    }
}
