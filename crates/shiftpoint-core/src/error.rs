// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

/// Structured error type shared by every shiftpoint crate.
///
/// # Error Philosophy
/// - Error messages are operational and carry the offending values.
/// - Variants are structured for reliable pattern matching; callers are
///   expected to match on the kind, not parse the message.
/// - Expected failures are represented as `Error` (not panics). The one
///   exception is duplicate cost-model registration, which is a
///   programming fault: the registry panics with the `DuplicateModel`
///   message instead of returning it.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid signal: {0}")]
    InvalidSignal(String),
    #[error("not enough points: {0}")]
    NotEnoughPoints(String),
    #[error("segment out of bounds: {0}")]
    SegmentOutOfBounds(String),
    #[error("cost not fitted: {0}")]
    CostNotFitted(String),
    #[error("detector not fitted: {0}")]
    NotFitted(String),
    #[error("invalid penalty: {0}")]
    InvalidPenalty(String),
    #[error("invalid min_size: {0}")]
    InvalidMinSize(String),
    #[error("no such model: {0}")]
    NoSuchModel(String),
    #[error("duplicate model: {0}")]
    DuplicateModel(String),
    #[error("value out of range: {0}")]
    ValueOutOfRange(String),
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("inconsistent shape: {0}")]
    InconsistentShape(String),
    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Convenience alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an `Error::InvalidSignal`.
    pub fn invalid_signal(msg: impl Into<String>) -> Self {
        Self::InvalidSignal(msg.into())
    }

    /// Creates an `Error::NotEnoughPoints`.
    pub fn not_enough_points(msg: impl Into<String>) -> Self {
        Self::NotEnoughPoints(msg.into())
    }

    /// Creates an `Error::SegmentOutOfBounds`.
    pub fn segment_out_of_bounds(msg: impl Into<String>) -> Self {
        Self::SegmentOutOfBounds(msg.into())
    }

    /// Creates an `Error::CostNotFitted`.
    pub fn cost_not_fitted(msg: impl Into<String>) -> Self {
        Self::CostNotFitted(msg.into())
    }

    /// Creates an `Error::NotFitted`.
    pub fn not_fitted(msg: impl Into<String>) -> Self {
        Self::NotFitted(msg.into())
    }

    /// Creates an `Error::InvalidPenalty`.
    pub fn invalid_penalty(msg: impl Into<String>) -> Self {
        Self::InvalidPenalty(msg.into())
    }

    /// Creates an `Error::InvalidMinSize`.
    pub fn invalid_min_size(msg: impl Into<String>) -> Self {
        Self::InvalidMinSize(msg.into())
    }

    /// Creates an `Error::NoSuchModel`.
    pub fn no_such_model(msg: impl Into<String>) -> Self {
        Self::NoSuchModel(msg.into())
    }

    /// Creates an `Error::DuplicateModel`.
    pub fn duplicate_model(msg: impl Into<String>) -> Self {
        Self::DuplicateModel(msg.into())
    }

    /// Creates an `Error::ValueOutOfRange`.
    pub fn value_out_of_range(msg: impl Into<String>) -> Self {
        Self::ValueOutOfRange(msg.into())
    }

    /// Creates an `Error::DimensionMismatch`.
    pub fn dimension_mismatch(msg: impl Into<String>) -> Self {
        Self::DimensionMismatch(msg.into())
    }

    /// Creates an `Error::InconsistentShape`.
    pub fn inconsistent_shape(msg: impl Into<String>) -> Self {
        Self::InconsistentShape(msg.into())
    }

    /// Creates an `Error::NotSupported`.
    pub fn not_supported(msg: impl Into<String>) -> Self {
        Self::NotSupported(msg.into())
    }
}
