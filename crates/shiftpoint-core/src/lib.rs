// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

pub mod constraints;
pub mod error;
pub mod linalg;
pub mod numerics;
pub mod signal;
pub mod stats;

pub use constraints::sanity_check;
pub use error::{Error, Result};
pub use signal::{
    Breakpoints, Matrix, Signal, segments_from_breakpoints, validate_breakpoints,
    validate_segment,
};
