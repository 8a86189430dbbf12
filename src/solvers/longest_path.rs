use crate::{
    MazeError,
    maze::{Coord, Grid},
};

/// The two ends of a longest path through a perfect maze.
///
/// Searches from the north-west corner for the farthest cell, then from that cell for the
/// farthest cell again. On a spanning tree the second search always ends on a diameter,
/// so the pair is exact. On a maze with loops or unreachable cells it is only a heuristic.
pub fn longest_path(grid: &Grid) -> Result<(Coord, Coord), MazeError> {
    let origin = Coord::new(0, 0);
    let (start, _) = grid.distances_from(origin)?.max();
    let (goal, distance) = grid.distances_from(start)?.max();
    tracing::debug!(%start, %goal, distance, "found longest path");
    Ok((start, goal))
}

/// Attach the longest path to the grid. Returns its endpoints and length.
pub fn solve_longest_path(grid: &mut Grid) -> Result<(Coord, Coord, usize), MazeError> {
    let (start, goal) = longest_path(grid)?;
    let length = super::solve_dijkstra(grid, start, goal)?;
    Ok((start, goal, length))
}
