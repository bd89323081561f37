// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::Kernel;
use shiftpoint_core::Result;
use shiftpoint_core::linalg::dot;

/// Polynomial kernel `K(x, y) = (scale · ⟨x, y⟩ + bias)^degree`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolynomialKernel {
    scale: f64,
    bias: f64,
    degree: f64,
}

impl PolynomialKernel {
    pub fn new(scale: f64, bias: f64, degree: f64) -> Self {
        Self {
            scale,
            bias,
            degree,
        }
    }
}

impl Kernel for PolynomialKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        let dot_product = dot(x, y)?;
        let base = self.scale * dot_product + self.bias;
        Ok(base.powf(self.degree))
    }

    fn name(&self) -> &'static str {
        "polynomial"
    }
}
