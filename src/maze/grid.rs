use rand::Rng;

use crate::MazeError;
use crate::maze::{Cell, Coord, Direction, Distances, row_major};

/// A rectangular grid of cells: the graph every generator carves a maze into.
///
/// Cells live in one flat row-major slice and refer to each other by [`Coord`].
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Box<[Cell]>,
    rows: usize,
    columns: usize,
    /// Distances attached for annotation, usually a solved path.
    distances: Option<Distances>,
}

impl Grid {
    /// Creates a `rows` x `columns` grid with every cell wired to its lattice neighbors
    /// and no passages carved.
    pub fn new(rows: usize, columns: usize) -> Result<Self, MazeError> {
        if rows < 2 || columns < 2 {
            return Err(MazeError::InvalidDimensions { rows, columns });
        }

        // All cells have to exist before any of them can be wired to a neighbor
        let cells = row_major(rows, columns)
            .map(Cell::new)
            .collect::<Vec<_>>()
            .into_boxed_slice();
        let mut grid = Grid {
            cells,
            rows,
            columns,
            distances: None,
        };
        grid.configure_cells();
        Ok(grid)
    }

    fn configure_cells(&mut self) {
        let (rows, columns) = (self.rows, self.columns);
        self.cells.iter_mut().for_each(|cell| {
            let coord = cell.coord();
            for dir in Direction::ALL {
                cell.set_neighbor(dir, dir.step(coord, rows, columns));
            }
        });
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of cells.
    pub fn size(&self) -> usize {
        self.rows * self.columns
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.column < self.columns
    }

    fn ravel_index(&self, coord: Coord) -> usize {
        coord.row * self.columns + coord.column
    }

    fn check(&self, coord: Coord) -> Result<(), MazeError> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                coord,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    /// Checked cell lookup.
    pub fn cell(&self, coord: Coord) -> Result<&Cell, MazeError> {
        self.check(coord)?;
        Ok(&self.cells[self.ravel_index(coord)])
    }

    fn cell_mut(&mut self, coord: Coord) -> Result<&mut Cell, MazeError> {
        self.check(coord)?;
        let idx = self.ravel_index(coord);
        Ok(&mut self.cells[idx])
    }

    /// A uniformly chosen cell.
    pub fn random_cell(&self, rng: &mut impl Rng) -> Coord {
        let row = rng.random_range(0..self.rows);
        let column = rng.random_range(0..self.columns);
        Coord::new(row, column)
    }

    pub fn each_row(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns)
    }

    /// Cells in row-major order.
    pub fn each_cell(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells with exactly one passage.
    pub fn deadends(&self) -> Vec<Coord> {
        self.each_cell()
            .filter(|cell| cell.link_count() == 1)
            .map(Cell::coord)
            .collect()
    }

    /// Number of passages carved, each counted once.
    pub fn link_count(&self) -> usize {
        self.each_cell().map(Cell::link_count).sum::<usize>() / 2
    }

    /// Carves a passage between two adjacent cells, on both sides.
    pub fn link(&mut self, from: Coord, to: Coord) -> Result<(), MazeError> {
        self.link_with(from, to, true)
    }

    /// Carves a passage out of `from` towards `to`, and back again if `bidirectional`.
    ///
    /// One-way links break the symmetry every generator relies on; they only exist for
    /// callers that patch up both sides themselves.
    pub fn link_with(&mut self, from: Coord, to: Coord, bidirectional: bool) -> Result<(), MazeError> {
        self.set_link(from, to, bidirectional, true)
    }

    /// Removes the passage between two adjacent cells, on both sides.
    pub fn unlink(&mut self, from: Coord, to: Coord) -> Result<(), MazeError> {
        self.unlink_with(from, to, true)
    }

    pub fn unlink_with(
        &mut self,
        from: Coord,
        to: Coord,
        bidirectional: bool,
    ) -> Result<(), MazeError> {
        self.set_link(from, to, bidirectional, false)
    }

    fn set_link(
        &mut self,
        from: Coord,
        to: Coord,
        bidirectional: bool,
        linked: bool,
    ) -> Result<(), MazeError> {
        self.check(to)?;
        let cell = self.cell_mut(from)?;
        let dir = cell
            .direction_to(to)
            .ok_or(MazeError::NotAdjacent { from, to })?;
        cell.set_link(dir, linked);
        if bidirectional {
            self.cell_mut(to)?.set_link(dir.opposite(), linked);
        }
        Ok(())
    }

    /// Whether `from` has a passage to `to`. Out-of-bounds cells are never linked.
    pub fn linked(&self, from: Coord, to: Coord) -> bool {
        self.cell(from).is_ok_and(|cell| cell.linked_to(to))
    }

    /// Whether a passage leads out of `coord` in `dir`.
    pub fn is_linked_dir(&self, coord: Coord, dir: Direction) -> Result<bool, MazeError> {
        Ok(self.cell(coord)?.is_linked_dir(dir))
    }

    /// Removes every passage and any attached distances, leaving the adjacency intact.
    pub fn clear_links(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear_links);
        self.distances = None;
    }

    /// Breadth-first distances from `root` following passages only.
    pub fn distances_from(&self, root: Coord) -> Result<Distances, MazeError> {
        Distances::from_root(self, root)
    }

    pub fn distances(&self) -> Option<&Distances> {
        self.distances.as_ref()
    }

    pub fn set_distances(&mut self, distances: Distances) {
        self.distances = Some(distances);
    }

    pub fn clear_distances(&mut self) -> Option<Distances> {
        self.distances.take()
    }

    /// Annotation text for a cell, three characters wide.
    ///
    /// Shows the attached distance in hexadecimal. Cells without a distance, and the
    /// root itself, are left blank.
    pub fn contents_of(&self, coord: Coord) -> Result<String, MazeError> {
        self.check(coord)?;
        let contents = match self.distances.as_ref().and_then(|d| d.get(coord)) {
            Some(distance) if distance > 0 => format!("{distance:^3X}"),
            _ => "   ".to_string(),
        };
        Ok(contents)
    }
}

/// Unchecked lookup.
///
/// # Panics
/// If `coord` is outside the grid. Use [`Grid::cell`] for a fallible lookup.
impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        self.cell(index).unwrap_or_else(|err| panic!("{err}"))
    }
}
