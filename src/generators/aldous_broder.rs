use rand::Rng;

use crate::{MazeError, maze::Grid};

/// Random walk that carves into a neighbor whenever the neighbor has never been carved into.
///
/// Produces every spanning tree with equal probability, at the price of a cover-time walk:
/// the last few unvisited cells can take a long time to stumble upon.
pub fn aldous_broder(grid: &mut Grid, rng: &mut impl Rng) -> Result<usize, MazeError> {
    let mut current = grid.random_cell(rng);
    let mut unvisited = grid.size() - 1;
    let mut steps = 0;

    while unvisited > 0 {
        let neighbor = grid[current]
            .random_neighbor(rng)
            .ok_or(MazeError::NoNeighbors(current))?;

        if !grid[neighbor].is_visited() {
            grid.link(current, neighbor)?;
            unvisited -= 1;
        }
        current = neighbor;
        steps += 1;
    }

    tracing::trace!(steps, "aldous-broder walk covered the grid");
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generators::get_rng, maze::Coord};

    #[test]
    fn test_covers_every_cell() {
        let mut rng = get_rng(Some(4));
        let mut grid = Grid::new(9, 4).unwrap();
        let steps = aldous_broder(&mut grid, &mut rng).unwrap();
        assert!(steps >= 9 * 4 - 1);
        assert_eq!(grid.link_count(), 9 * 4 - 1);
        assert!(grid.each_cell().all(|cell| cell.is_visited()));
        assert_eq!(grid.distances_from(Coord::new(8, 3)).unwrap().len(), 36);
    }
}
