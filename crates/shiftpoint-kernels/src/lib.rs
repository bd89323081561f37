// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

pub mod cosine;
pub mod gaussian;
pub mod linear;
pub mod polynomial;

pub use cosine::CosineKernel;
pub use gaussian::{GAUSSIAN_CLIP_HIGH, GAUSSIAN_CLIP_LOW, GaussianKernel};
pub use linear::LinearKernel;
pub use polynomial::PolynomialKernel;

use shiftpoint_core::Result;

/// Shared contract for pointwise kernels `K(x, y)` over equal-length real
/// vectors.
pub trait Kernel {
    /// Evaluates the kernel for a pair of feature vectors.
    ///
    /// Fails with `DimensionMismatch` when the inputs differ in length.
    fn compute(&self, x: &[f64], y: &[f64]) -> Result<f64>;

    /// Stable kernel name, e.g. `"gaussian"`.
    fn name(&self) -> &'static str;
}
