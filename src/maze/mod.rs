pub mod cell;
mod distances;
mod grid;
mod rotator;

use std::fmt;

pub use cell::Cell;
pub use distances::Distances;
pub use grid::Grid;
pub use rotator::rotate;

/// Position of a cell in the grid, as (row, column) with (0, 0) at the northwest corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub column: usize,
}

impl Coord {
    pub const fn new(row: usize, column: usize) -> Self {
        Coord { row, column }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, column): (usize, usize)) -> Self {
        Coord { row, column }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// One of the four lattice directions a cell can have a neighbor in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Every direction, in the order neighbors and links are iterated.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// The coordinate one step away in this direction, if it lies inside a `rows` x `columns` grid.
    pub fn step(self, from: Coord, rows: usize, columns: usize) -> Option<Coord> {
        let Coord { row, column } = from;
        // checked_sub handles the north/west edges, the bound check the south/east ones
        match self {
            Direction::North => row.checked_sub(1).map(|row| Coord::new(row, column)),
            Direction::South => (row + 1 < rows).then(|| Coord::new(row + 1, column)),
            Direction::East => (column + 1 < columns).then(|| Coord::new(row, column + 1)),
            Direction::West => column.checked_sub(1).map(|column| Coord::new(row, column)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::East => write!(f, "east"),
            Direction::West => write!(f, "west"),
        }
    }
}

/// Iterate every coordinate of a `rows` x `columns` grid in row-major order.
///
/// Unlike [`Grid::each_cell`], the iterator holds no borrow of the grid, so generators
/// can link cells while walking it.
pub fn row_major(rows: usize, columns: usize) -> impl Iterator<Item = Coord> {
    (0..rows).flat_map(move |row| (0..columns).map(move |column| Coord::new(row, column)))
}
