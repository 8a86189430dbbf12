use rand::Rng;

use std::hash::{Hash, Hasher};

use crate::maze::{Coord, Direction};

/// A node of the grid graph.
///
/// Neighbors are the fixed lattice adjacency wired when the grid is built. Links are the
/// passages carved between this cell and some of those neighbors. Both are stored by
/// direction and resolved to coordinates, so cells never hold references to each other.
#[derive(Debug, Clone)]
pub struct Cell {
    coord: Coord,
    neighbors: [Option<Coord>; 4],
    links: [bool; 4],
}

impl Cell {
    /// A cell with no neighbors and no links. [`Grid`](crate::maze::Grid) wires the neighbors.
    pub(crate) fn new(coord: Coord) -> Self {
        Cell {
            coord,
            neighbors: [None; 4],
            links: [false; 4],
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn row(&self) -> usize {
        self.coord.row
    }

    pub fn column(&self) -> usize {
        self.coord.column
    }

    pub fn north(&self) -> Option<Coord> {
        self.neighbor(Direction::North)
    }

    pub fn south(&self) -> Option<Coord> {
        self.neighbor(Direction::South)
    }

    pub fn east(&self) -> Option<Coord> {
        self.neighbor(Direction::East)
    }

    pub fn west(&self) -> Option<Coord> {
        self.neighbor(Direction::West)
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Coord> {
        self.neighbors[dir.index()]
    }

    pub(crate) fn set_neighbor(&mut self, dir: Direction, neighbor: Option<Coord>) {
        self.neighbors[dir.index()] = neighbor;
    }

    /// Adjacent cells in north, south, east, west order, skipping the grid edge.
    pub fn neighbors(&self) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors.iter().flatten().copied()
    }

    /// Pick one of the neighbors uniformly, or `None` for an isolated cell.
    pub fn random_neighbor(&self, rng: &mut impl Rng) -> Option<Coord> {
        let neighbors = self.neighbors().collect::<Vec<_>>();
        if neighbors.is_empty() {
            return None;
        }
        Some(neighbors[rng.random_range(0..neighbors.len())])
    }

    /// The direction in which `other` is adjacent to this cell, if it is adjacent at all.
    pub fn direction_to(&self, other: Coord) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.neighbor(dir) == Some(other))
    }

    /// Linked cells in north, south, east, west order.
    pub fn links(&self) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.links[dir.index()])
            .filter_map(|dir| self.neighbor(dir))
    }

    pub fn link_count(&self) -> usize {
        self.links.iter().filter(|&&linked| linked).count()
    }

    /// Whether a passage leads out of this cell in `dir`.
    pub fn is_linked_dir(&self, dir: Direction) -> bool {
        self.links[dir.index()]
    }

    pub fn linked_to(&self, other: Coord) -> bool {
        self.direction_to(other)
            .is_some_and(|dir| self.is_linked_dir(dir))
    }

    /// A cell counts as visited by the generators as soon as it has a single link.
    pub fn is_visited(&self) -> bool {
        self.links.iter().any(|&linked| linked)
    }

    pub(crate) fn set_link(&mut self, dir: Direction, linked: bool) {
        self.links[dir.index()] = linked;
    }

    pub(crate) fn clear_links(&mut self) {
        self.links = [false; 4];
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}
