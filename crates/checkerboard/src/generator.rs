//! Checkerboard pattern generation
//!
//! The grid starts zero-filled. Two strided passes then set the 1s:
//!
//! - even rows, odd columns (`[::2, 1::2] = 1`)
//! - odd rows, even columns (`[1::2, ::2] = 1`)
//!
//! which leaves `cell(i, j) == (i + j) % 2` everywhere.

use tracing::{debug, trace};

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::stride::Stride;

/// Builds checkerboard grids from a [`GeneratorConfig`].
///
/// The generator holds no state between runs, so calling
/// [`generate`](PatternGenerator::generate) twice gives equal grids.
#[derive(Debug, Clone, Default)]
pub struct PatternGenerator {
    config: GeneratorConfig,
}

impl PatternGenerator {
    /// Create a generator from a config.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Create a generator for a grid of the given size.
    pub fn with_size(size: usize) -> Self {
        Self::new(GeneratorConfig::with_size(size))
    }

    /// Build the grid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if the configured size is zero or above `MAX_SIZE`.
    pub fn generate(&self) -> Result<Grid> {
        self.config.validate()?;
        let size = self.config.size;
        debug!(size, "generating checkerboard");

        let mut grid = Grid::zeroed(size)?;
        for (rows, cols) in [(Stride::EVEN, Stride::ODD), (Stride::ODD, Stride::EVEN)] {
            let written = grid.fill_strided(rows, cols, 1)?;
            debug!(%rows, %cols, written, "strided fill");
        }

        if self.config.trace {
            for (index, row) in grid.rows().enumerate() {
                trace!(index, ?row, "row");
            }
        }

        Ok(grid)
    }
}

/// Closed-form value of cell `(row, col)` in a checkerboard.
pub fn expected_cell(row: usize, col: usize) -> u8 {
    ((row + col) % 2) as u8
}

/// Build an n×n checkerboard with default settings.
///
/// # Errors
///
/// Returns `InvalidSize` if `size` is zero or above `MAX_SIZE`.
pub fn generate(size: usize) -> Result<Grid> {
    PatternGenerator::with_size(size).generate()
}
