use indexmap::IndexMap;

use crate::MazeError;
use crate::maze::{Coord, Grid};

/// Hop distances from a root cell to every cell reachable through passages.
///
/// Cells are kept in the order they were discovered, which makes [`Distances::max`]
/// deterministic for a given maze. A `Distances` is a snapshot: carving or removing
/// passages afterwards does not update it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distances {
    root: Coord,
    cells: IndexMap<Coord, usize>,
}

impl Distances {
    /// Only the root, at distance zero.
    pub fn new(root: Coord) -> Self {
        let mut cells = IndexMap::new();
        cells.insert(root, 0);
        Distances { root, cells }
    }

    /// Breadth-first search from `root` over the passages of `grid`.
    ///
    /// Every passage has length one, so expanding the frontier level by level yields
    /// shortest distances without a priority queue.
    pub fn from_root(grid: &Grid, root: Coord) -> Result<Self, MazeError> {
        grid.cell(root)?;
        let mut distances = Distances::new(root);
        let mut frontier = vec![root];

        while !frontier.is_empty() {
            let mut next_frontier = Vec::new();
            for coord in frontier {
                let distance = distances.cells[&coord];
                for linked in grid[coord].links() {
                    if distances.cells.contains_key(&linked) {
                        continue;
                    }
                    distances.cells.insert(linked, distance + 1);
                    next_frontier.push(linked);
                }
            }
            frontier = next_frontier;
        }

        Ok(distances)
    }

    pub fn root(&self) -> Coord {
        self.root
    }

    pub fn get(&self, coord: Coord) -> Option<usize> {
        self.cells.get(&coord).copied()
    }

    pub fn set(&mut self, coord: Coord, distance: usize) {
        self.cells.insert(coord, distance);
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Known cells, in discovery order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells on the path from the root to `goal`, with their distances.
    ///
    /// Walks back from `goal`, each time stepping to the first linked neighbor (in
    /// north, south, east, west order) that is closer to the root.
    pub fn path_to(&self, grid: &Grid, goal: Coord) -> Result<Distances, MazeError> {
        let no_path = MazeError::NoPath {
            from: self.root,
            to: goal,
        };
        let mut current_distance = self.get(goal).ok_or_else(|| no_path.clone())?;
        let mut current = goal;

        let mut breadcrumbs = Distances::new(self.root);
        breadcrumbs.set(current, current_distance);

        while current != self.root {
            let Some((closer, distance)) = grid
                .cell(current)?
                .links()
                .filter_map(|linked| self.get(linked).map(|distance| (linked, distance)))
                .find(|&(_, distance)| distance < current_distance)
            else {
                return Err(no_path);
            };
            breadcrumbs.set(closer, distance);
            current = closer;
            current_distance = distance;
        }

        Ok(breadcrumbs)
    }

    /// The farthest known cell and its distance.
    ///
    /// Ties go to the cell discovered first, so the answer depends on the discovery order
    /// of the search that built these distances, not only on the set of distances.
    pub fn max(&self) -> (Coord, usize) {
        self.cells
            .iter()
            .fold((self.root, 0), |(best, max_distance), (&coord, &distance)| {
                if distance > max_distance {
                    (coord, distance)
                } else {
                    (best, max_distance)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// (0,0)-(0,1)-(0,2) carved in a line, second row untouched.
    fn corridor() -> Grid {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.link(Coord::new(0, 0), Coord::new(0, 1)).unwrap();
        grid.link(Coord::new(0, 1), Coord::new(0, 2)).unwrap();
        grid
    }

    #[test]
    fn test_index_access() {
        let root = Coord::new(0, 0);
        let mut distances = Distances::new(root);
        assert_eq!(distances.get(root), Some(0));
        distances.set(Coord::new(0, 1), 13);
        assert_eq!(distances.get(Coord::new(0, 1)), Some(13));
        assert_eq!(distances.get(Coord::new(2, 2)), None);
    }

    #[test]
    fn test_linear_distances() {
        let grid = corridor();
        let distances = grid.distances_from(Coord::new(0, 0)).unwrap();
        assert_eq!(distances.len(), 3);
        assert_eq!(distances.get(Coord::new(0, 0)), Some(0));
        assert_eq!(distances.get(Coord::new(0, 1)), Some(1));
        assert_eq!(distances.get(Coord::new(0, 2)), Some(2));
        // Adjacent but not linked
        assert!(!distances.contains(Coord::new(1, 0)));
    }

    #[test]
    fn test_distances_rejects_bad_root() {
        let grid = corridor();
        assert!(matches!(
            grid.distances_from(Coord::new(2, 0)),
            Err(MazeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_path_to() {
        let mut grid = corridor();
        grid.link(Coord::new(0, 1), Coord::new(1, 1)).unwrap();
        let distances = grid.distances_from(Coord::new(0, 0)).unwrap();

        let path = distances.path_to(&grid, Coord::new(0, 2)).unwrap();
        assert_eq!(path.root(), Coord::new(0, 0));
        assert_eq!(path.len(), 3);
        assert_eq!(path.get(Coord::new(0, 2)), Some(2));
        assert_eq!(path.get(Coord::new(0, 1)), Some(1));
        // Branch off the path
        assert_eq!(path.get(Coord::new(1, 1)), None);
    }

    #[test]
    fn test_path_to_unreachable() {
        let grid = corridor();
        let distances = grid.distances_from(Coord::new(0, 0)).unwrap();
        assert_eq!(
            distances.path_to(&grid, Coord::new(1, 2)),
            Err(MazeError::NoPath {
                from: Coord::new(0, 0),
                to: Coord::new(1, 2)
            })
        );
    }

    #[test]
    fn test_max_prefers_first_discovered() {
        let mut grid = Grid::new(3, 3).unwrap();
        let center = Coord::new(1, 1);
        // Four arms of equal length around the center
        for arm in [Coord::new(0, 1), Coord::new(2, 1), Coord::new(1, 2), Coord::new(1, 0)] {
            grid.link(center, arm).unwrap();
        }
        let distances = grid.distances_from(center).unwrap();
        assert_eq!(distances.max(), (Coord::new(0, 1), 1));
    }

    #[test]
    fn test_max_of_lone_root() {
        let grid = Grid::new(2, 2).unwrap();
        let distances = grid.distances_from(Coord::new(1, 1)).unwrap();
        assert_eq!(distances.len(), 1);
        assert_eq!(distances.max(), (Coord::new(1, 1), 0));
    }
}
