// rule.rs - B3/S23 on a torus
//
// Edges wrap on both axes: row 0's north neighbour is the last row and
// column 0's west neighbour is the last column.

use crate::grid::Grid;

/// Live cells among the 8 wrapped neighbours of (row, col).
///
/// Each direction is counted once even when the grid is so small that two
/// directions land on the same cell.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (rows, cols) = grid.dimensions();

    let north = if row == 0 { rows - 1 } else { row - 1 };
    let south = if row == rows - 1 { 0 } else { row + 1 };
    let west = if col == 0 { cols - 1 } else { col - 1 };
    let east = if col == cols - 1 { 0 } else { col + 1 };

    let neighbors = [
        (north, col),  // N
        (north, east), // NE
        (row, east),   // E
        (south, east), // SE
        (south, col),  // S
        (south, west), // SW
        (row, west),   // W
        (north, west), // NW
    ];

    neighbors
        .iter()
        .filter(|&&(nr, nc)| grid.at(nr, nc))
        .count() as u8
}

pub fn next_cell(grid: &Grid, row: usize, col: usize) -> bool {
    match (grid.at(row, col), live_neighbors(grid, row, col)) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

/// Computes the following generation as a brand-new grid.
pub fn next_generation(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();
    let mut next = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            next.push(next_cell(grid, row, col));
        }
    }
    Grid::from_cells(rows, cols, next)
}
