// grid.rs - Grid type for Conway's Game of Life
//
// Cells live in one flat row-major buffer (index = row * cols + col). A Grid
// is never edited in place: `with_cell` hands back a fresh copy, so two
// snapshots can never alias the same storage.

use std::fmt;

use crate::error::{GridError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Builds a grid by calling `init(row, col)` once per cell, row by row.
    pub fn new(rows: usize, cols: usize, mut init: impl FnMut(usize, usize) -> bool) -> Result<Self> {
        let len = match rows.checked_mul(cols) {
            Some(len) if len > 0 => len,
            _ => return Err(GridError::InvalidDimension { rows, cols }),
        };

        let mut cells = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(init(row, col));
            }
        }

        Ok(Self { rows, cols, cells })
    }

    pub fn dead(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols, |_, _| false)
    }

    /// A grid where exactly the listed cells are alive.
    pub fn with_live_cells(rows: usize, cols: usize, live: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::dead(rows, cols)?;
        for &(row, col) in live {
            let index = grid.index(row, col)?;
            grid.cells[index] = true;
        }
        Ok(grid)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Returns a copy of this grid with one cell set to `value`.
    pub fn with_cell(&self, row: usize, col: usize, value: bool) -> Result<Self> {
        let index = self.index(row, col)?;
        let mut next = self.clone();
        next.cells[index] = value;
        Ok(next)
    }

    pub fn count_where(&self, predicate: impl Fn(bool) -> bool) -> usize {
        self.cells.iter().filter(|&&alive| predicate(alive)).count()
    }

    pub fn population(&self) -> usize {
        self.count_where(|alive| alive)
    }

    /// Every cell as `(row, col, alive)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &alive)| (i / cols, i % cols, alive))
    }

    /// Wraps an already computed row-major buffer.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Unchecked read for callers that already wrapped their coordinates.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::dead(0, 4),
            Err(GridError::InvalidDimension { rows: 0, cols: 4 })
        );
        assert_eq!(
            Grid::dead(3, 0),
            Err(GridError::InvalidDimension { rows: 3, cols: 0 })
        );
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let err = Grid::new(usize::MAX, 2, |_, _| false).unwrap_err();
        assert_eq!(err, GridError::InvalidDimension { rows: usize::MAX, cols: 2 });
    }

    #[test]
    fn initializer_runs_in_row_major_order() {
        let mut visited = Vec::new();
        Grid::new(2, 3, |r, c| {
            visited.push((r, c));
            false
        })
        .unwrap();

        assert_eq!(visited, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn get_rejects_out_of_range() {
        let grid = Grid::dead(3, 4).unwrap();
        assert_eq!(
            grid.get(3, 0),
            Err(GridError::OutOfRange { row: 3, col: 0, rows: 3, cols: 4 })
        );
        assert!(grid.get(2, 4).is_err());
        assert_eq!(grid.get(2, 3), Ok(false));
    }

    #[test]
    fn with_cell_leaves_receiver_untouched() {
        let original = Grid::dead(3, 3).unwrap();
        let updated = original.with_cell(1, 2, true).unwrap();

        assert_eq!(original.population(), 0);
        assert_eq!(updated.get(1, 2), Ok(true));
        assert_eq!(updated.population(), 1);
        assert_ne!(original, updated);
    }

    #[test]
    fn with_live_cells_rejects_stray_coordinates() {
        assert!(Grid::with_live_cells(2, 2, &[(0, 0), (2, 0)]).is_err());
    }

    #[test]
    fn equality_needs_matching_dimensions() {
        // Same number of cells, different shape.
        assert_ne!(Grid::dead(2, 3).unwrap(), Grid::dead(3, 2).unwrap());
    }

    #[test]
    fn display_draws_rows() {
        let grid = Grid::with_live_cells(2, 3, &[(0, 1), (1, 0)]).unwrap();
        assert_eq!(grid.to_string(), ".#.\n#..");
    }

    #[test]
    fn iter_reports_coordinates() {
        let grid = Grid::with_live_cells(2, 2, &[(1, 0)]).unwrap();
        let live: Vec<_> = grid.iter().filter(|&(_, _, alive)| alive).collect();
        assert_eq!(live, vec![(1, 0, true)]);
    }
}
