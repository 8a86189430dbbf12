use thiserror::Error;

use crate::maze::Coord;

/// Errors produced while building, carving or solving a maze.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("a maze needs at least 2 rows and 2 columns, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("cell {coord} is out of bounds for a {rows}x{columns} grid")]
    OutOfBounds {
        coord: Coord,
        rows: usize,
        columns: usize,
    },

    #[error("cells {from} and {to} are not neighbors and cannot be linked")]
    NotAdjacent { from: Coord, to: Coord },

    /// Only reachable on a malformed grid: every cell of a 2x2 or larger grid has a neighbor.
    #[error("cell {0} has no neighbors to walk to")]
    NoNeighbors(Coord),

    #[error("no path from {from} to {to}")]
    NoPath { from: Coord, to: Coord },
}
