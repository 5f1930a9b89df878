//! # Checkerboard
//!
//! Builds an n×n grid of 0s and 1s where cell `(i, j)` is `(i + j) % 2`,
//! and prints it row by row.
//!
//! The grid is built the way a strided slice assignment would do it:
//! zero-fill, then set odd columns of even rows and even columns of
//! odd rows to 1.
//!
//! ```
//! let grid = checkerboard::generate(2).unwrap();
//! assert_eq!(grid.to_string(), "0 1 \n1 0 \n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod render;
pub mod stride;

// Re-export main types
pub use cli::Cli;
pub use config::{GeneratorConfig, OutputFormat, DEFAULT_SIZE, MAX_SIZE};
pub use error::{CheckerboardError, Result};
pub use generator::{expected_cell, generate, PatternGenerator};
pub use grid::Grid;
pub use render::{print, render_to_string, write_grid, write_json, write_text};
pub use stride::Stride;

/// Checkerboard version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
