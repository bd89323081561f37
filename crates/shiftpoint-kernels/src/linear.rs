// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::Kernel;
use shiftpoint_core::Result;
use shiftpoint_core::linalg::dot;

/// Linear kernel `K(x, y) = ⟨x, y⟩`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinearKernel;

impl LinearKernel {
    pub fn new() -> Self {
        Self
    }
}

impl Kernel for LinearKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        dot(x, y)
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}
