// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

pub mod entropy;
pub mod l1;
pub mod l2;
pub mod model;
pub mod rbf;
pub mod registry;

pub use entropy::{ALPHABET_SIZE, CostEntropy};
pub use l1::CostL1;
pub use l2::CostL2;
pub use model::{Cost, CostFunction, sum_of_costs};
pub use rbf::CostRbf;
pub use registry::{new_cost, register_cost_function};
