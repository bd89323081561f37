// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::Kernel;
use shiftpoint_core::Result;
use shiftpoint_core::linalg::{dot, vector_norm};

/// Cosine similarity kernel `K(x, y) = ⟨x, y⟩ / (‖x‖ · ‖y‖)`.
///
/// Returns `0.0` when either vector has zero norm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CosineKernel;

impl CosineKernel {
    pub fn new() -> Self {
        Self
    }
}

impl Kernel for CosineKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        let dot_product = dot(x, y)?;

        let denom = vector_norm(x) * vector_norm(y);
        if denom == 0.0 {
            return Ok(0.0);
        }

        Ok(dot_product / denom)
    }

    fn name(&self) -> &'static str {
        "cosine"
    }
}
