//! Generator configuration

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{CheckerboardError, Result};

/// Grid size used when none is given.
pub const DEFAULT_SIZE: usize = 5;

/// Largest accepted grid size. A 4096×4096 grid is 16 MiB of cells
/// and about 32 MiB of text output.
pub const MAX_SIZE: usize = 4096;

/// How a finished grid is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Space-separated rows, one per line
    #[default]
    Text,

    /// Pretty-printed JSON object
    Json,
}

/// Configuration for a single generator run.
///
/// Built from command-line arguments by the binary, or directly
/// by library callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Side length of the square grid
    pub size: usize,

    /// Output format
    pub format: OutputFormat,

    /// Whether to trace each generated row
    pub trace: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            format: OutputFormat::default(),
            trace: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config for a specific grid size.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Check that the config describes a grid that can be built.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `size` is zero or above [`MAX_SIZE`].
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SIZE).contains(&self.size) {
            return Err(CheckerboardError::InvalidSize { size: self.size });
        }
        Ok(())
    }
}
