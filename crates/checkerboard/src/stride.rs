//! Strided index selection along one grid axis
//!
//! A [`Stride`] is the `start::step` part of a slice such as `matrix[1::2]`.
//! It picks `start`, `start + step`, `start + 2 * step`, ... up to a length.

use std::fmt;

use crate::error::{CheckerboardError, Result};

/// A `start::step` selection of indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stride {
    start: usize,
    step: usize,
}

impl Stride {
    /// Every even index: `::2`
    pub const EVEN: Stride = Stride { start: 0, step: 2 };

    /// Every odd index: `1::2`
    pub const ODD: Stride = Stride { start: 1, step: 2 };

    /// Create a stride.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStride` if `step` is zero.
    pub fn new(start: usize, step: usize) -> Result<Self> {
        if step == 0 {
            return Err(CheckerboardError::InvalidStride { step });
        }
        Ok(Self { start, step })
    }

    /// Iterate the selected indices below `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use checkerboard::Stride;
    ///
    /// let odd: Vec<usize> = Stride::ODD.indices(5).collect();
    /// assert_eq!(odd, vec![1, 3]);
    /// ```
    pub fn indices(&self, len: usize) -> impl Iterator<Item = usize> {
        (self.start..len).step_by(self.step)
    }

    /// Number of selected indices below `len`.
    pub fn count(&self, len: usize) -> usize {
        if self.start >= len {
            0
        } else {
            (len - self.start).div_ceil(self.step)
        }
    }
}

impl fmt::Display for Stride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == 0 {
            write!(f, "::{}", self.step)
        } else {
            write!(f, "{}::{}", self.start, self.step)
        }
    }
}
