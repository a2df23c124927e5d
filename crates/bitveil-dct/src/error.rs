//! Error types for block DCT operations.

use std::fmt;
use thiserror::Error;

/// Result type alias for block DCT operations.
pub type Result<T> = std::result::Result<T, DctError>;

/// Errors that can occur while embedding into or extracting from blocks.
#[derive(Error)]
pub enum DctError {
    /// More bits were requested than the plane has full blocks.
    #[error("capacity exceeded: {required} bits requested but only {available} blocks available")]
    CapacityExceeded { required: usize, available: usize },

    /// A block index beyond the last full block of the plane.
    #[error("block {index} is out of range, the plane has {blocks} full blocks")]
    BlockOutOfRange { index: usize, blocks: usize },

    /// The quantization step must be a finite, positive number.
    #[error("invalid quantization step: {0}")]
    InvalidQuantizationStep(f64),

    /// The embedding coefficient must address a cell of an 8×8 block.
    #[error("invalid coefficient position ({row}, {col})")]
    InvalidCoefficientPosition { row: usize, col: usize },

    /// Rounding or clamping the written samples destroyed the embedded bit.
    ///
    /// Happens in flat regions saturated at black or white, the samples
    /// cannot move past 0 or 255 to form the coefficient.
    #[error(
        "block {index} cannot hold a bit: its samples clip at 0 or 255, saturated black or white regions cannot carry data"
    )]
    UnstableBlock { index: usize },

    /// Sample buffer does not match the declared plane dimensions.
    #[error("plane of {width}x{height} needs {expected} samples, got {actual}")]
    PlaneSizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Debug for DctError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
