//! Error types for checkerboard generation

use thiserror::Error;

/// Main error type for checkerboard operations
#[derive(Error, Debug)]
pub enum CheckerboardError {
    /// Grid size outside `1..=MAX_SIZE`
    #[error(
        "Invalid size: {size} (grid size must be between 1 and {max})",
        max = crate::config::MAX_SIZE
    )]
    InvalidSize {
        /// The rejected size
        size: usize,
    },

    /// Stride with a zero step
    #[error("Invalid stride: step {step} (step must be at least 1)")]
    InvalidStride {
        /// The rejected step
        step: usize,
    },

    /// Cell position outside the grid
    #[error("Cell ({row}, {col}) out of bounds for {size}x{size} grid")]
    OutOfBounds {
        /// Row index
        row: usize,
        /// Column index
        col: usize,
        /// Grid size
        size: usize,
    },

    /// Cell value other than 0 or 1
    #[error("Invalid cell value: {value} (expected 0 or 1)")]
    InvalidCell {
        /// The rejected value
        value: u8,
    },

    /// Failure writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure serializing a grid
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for checkerboard operations
pub type Result<T> = std::result::Result<T, CheckerboardError>;
