//! Error kinds of the maze core

use thiserror::Error;

/// Precondition violations detected by the grid and the generator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Grid with zero width or height, or too many cells to allocate
    #[error("invalid maze dimensions {nx}x{ny}")]
    InvalidDimension { nx: usize, ny: usize },

    /// Coordinate outside of `[0, nx) x [0, ny)`
    #[error("coordinate ({x}, {y}) is outside of the {nx}x{ny} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        nx: usize,
        ny: usize,
    },

    /// Backtracking stack ran out before every cell was visited
    #[error("generation stuck after visiting {visited} of {total} cells")]
    GenerationStuck { visited: usize, total: usize },
}
