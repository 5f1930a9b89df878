//! Square grid of 0/1 cells

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::config::MAX_SIZE;
use crate::error::{CheckerboardError, Result};
use crate::stride::Stride;

/// An n×n grid of cells holding 0 or 1.
///
/// Cells are stored flat in row-major order, so cell `(row, col)`
/// lives at `row * size + col`.
///
/// # Example
///
/// ```
/// use checkerboard::{Grid, Stride};
///
/// let mut grid = Grid::zeroed(3).unwrap();
/// grid.fill_strided(Stride::EVEN, Stride::ODD, 1).unwrap();
/// assert_eq!(grid.get(0, 1), Some(1));
/// assert_eq!(grid.get(1, 0), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create a grid with every cell set to 0.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `size` is zero, above [`MAX_SIZE`], or
    /// has a cell count that does not fit in `usize`.
    pub fn zeroed(size: usize) -> Result<Self> {
        let len = (1..=MAX_SIZE)
            .contains(&size)
            .then(|| size.checked_mul(size))
            .flatten()
            .ok_or(CheckerboardError::InvalidSize { size })?;
        Ok(Self {
            size,
            cells: vec![0; len],
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells. Never true for a grid from [`Grid::zeroed`].
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Get the cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.offset(row, col).map(|i| self.cells[i])
    }

    /// Set the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for a position outside the grid and
    /// `InvalidCell` for a value other than 0 or 1.
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        check_cell(value)?;
        let i = self.offset(row, col).ok_or(CheckerboardError::OutOfBounds {
            row,
            col,
            size: self.size,
        })?;
        self.cells[i] = value;
        Ok(())
    }

    /// Assign `value` to every cell whose row is picked by `rows` and whose
    /// column is picked by `cols`, like `matrix[rows, cols] = value`.
    ///
    /// Returns the number of cells written.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCell` for a value other than 0 or 1.
    pub fn fill_strided(&mut self, rows: Stride, cols: Stride, value: u8) -> Result<usize> {
        check_cell(value)?;
        let size = self.size;
        for row in rows.indices(size) {
            let row_cells = &mut self.cells[row * size..(row + 1) * size];
            for col in cols.indices(size) {
                row_cells[col] = value;
            }
        }
        Ok(rows.count(size) * cols.count(size))
    }

    /// Iterate rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.size)
    }

    /// Return a new grid with rows and columns swapped.
    pub fn transpose(&self) -> Grid {
        let size = self.size;
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .map(|(row, col)| self.cells[col * size + row])
            .collect();
        Grid { size, cells }
    }

    /// Whether `cell(i, j) == cell(j, i)` for every position.
    pub fn is_symmetric(&self) -> bool {
        *self == self.transpose()
    }

    /// Whether every pair of edge-adjacent cells differs.
    pub fn is_checkerboard(&self) -> bool {
        let size = self.size;
        (0..size).all(|row| {
            (0..size).all(|col| {
                let here = self.cells[row * size + col];
                let right_differs = col + 1 >= size || self.cells[row * size + col + 1] != here;
                let down_differs = row + 1 >= size || self.cells[(row + 1) * size + col] != here;
                right_differs && down_differs
            })
        })
    }
}

fn check_cell(value: u8) -> Result<()> {
    match value {
        0 | 1 => Ok(()),
        _ => Err(CheckerboardError::InvalidCell { value }),
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let rows: Vec<&[u8]> = self.rows().collect();
        let mut state = serializer.serialize_struct("Grid", 2)?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("cells", &rows)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_grid() {
        let grid = Grid::zeroed(4).unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.len(), 16);
        assert!(!grid.is_empty());
        assert!(grid.rows().all(|row| row.iter().all(|&c| c == 0)));
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = Grid::zeroed(0).unwrap_err();
        assert!(matches!(err, CheckerboardError::InvalidSize { size: 0 }));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        for size in [MAX_SIZE + 1, usize::MAX] {
            let err = Grid::zeroed(size).unwrap_err();
            assert!(matches!(err, CheckerboardError::InvalidSize { size: s } if s == size));
        }
        assert_eq!(Grid::zeroed(MAX_SIZE).unwrap().len(), MAX_SIZE * MAX_SIZE);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::zeroed(2).unwrap();
        assert_eq!(grid.get(1, 1), Some(0));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_set_validates() {
        let mut grid = Grid::zeroed(2).unwrap();
        grid.set(1, 0, 1).unwrap();
        assert_eq!(grid.get(1, 0), Some(1));

        assert!(matches!(
            grid.set(0, 0, 2),
            Err(CheckerboardError::InvalidCell { value: 2 })
        ));
        assert!(matches!(
            grid.set(3, 0, 1),
            Err(CheckerboardError::OutOfBounds { row: 3, col: 0, size: 2 })
        ));
    }

    #[test]
    fn test_fill_strided_counts_writes() {
        let mut grid = Grid::zeroed(5).unwrap();
        // rows 0, 2, 4 x cols 1, 3
        assert_eq!(grid.fill_strided(Stride::EVEN, Stride::ODD, 1).unwrap(), 6);
        // rows 1, 3 x cols 0, 2, 4
        assert_eq!(grid.fill_strided(Stride::ODD, Stride::EVEN, 1).unwrap(), 6);
    }

    #[test]
    fn test_fill_strided_rejects_bad_value() {
        let mut grid = Grid::zeroed(3).unwrap();
        let every = Stride::new(0, 1).unwrap();
        assert!(grid.fill_strided(every, every, 7).is_err());
        assert!(grid.rows().all(|row| row.iter().all(|&c| c == 0)));
    }

    #[test]
    fn test_transpose_asymmetric() {
        let mut grid = Grid::zeroed(3).unwrap();
        grid.set(0, 2, 1).unwrap();
        assert!(!grid.is_symmetric());

        let t = grid.transpose();
        assert_eq!(t.get(2, 0), Some(1));
        assert_eq!(t.get(0, 2), Some(0));
        assert_eq!(t.transpose(), grid);
    }

    #[test]
    fn test_zeroed_is_not_checkerboard() {
        assert!(!Grid::zeroed(2).unwrap().is_checkerboard());
        // A single cell has no neighbours.
        assert!(Grid::zeroed(1).unwrap().is_checkerboard());
    }

    #[test]
    fn test_serialize_shape() {
        let mut grid = Grid::zeroed(2).unwrap();
        grid.set(0, 1, 1).unwrap();
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["size"], 2);
        assert_eq!(json["cells"], serde_json::json!([[0, 1], [0, 0]]));
    }
}
