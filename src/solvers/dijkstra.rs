use crate::{
    MazeError,
    maze::{Coord, Grid},
};

/// Find the path from `start` to `goal` and attach it to the grid as its distances.
///
/// Returns the length of the path in passages. Passages all have the same length, so the
/// search is a breadth-first expansion rather than a priority-queue Dijkstra.
pub fn solve_dijkstra(grid: &mut Grid, start: Coord, goal: Coord) -> Result<usize, MazeError> {
    grid.cell(goal)?;
    let distances = grid.distances_from(start)?;
    let path = distances.path_to(grid, goal)?;
    let length = path.get(goal).unwrap_or_default();
    tracing::debug!(%start, %goal, length, "maze solved");

    grid.set_distances(path);
    Ok(length)
}
