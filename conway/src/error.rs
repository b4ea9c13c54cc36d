// error.rs - Errors raised by grid construction and cell access

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    #[error("invalid grid dimensions {rows}x{cols}: rows and cols must both be positive")]
    InvalidDimension { rows: usize, cols: usize },

    /// Coordinates outside `[0, rows) x [0, cols)`.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A seeded grid does not match the simulation's fixed size.
    #[error("expected a {}x{} grid, got {}x{}", .expected.0, .expected.1, .found.0, .found.1)]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
