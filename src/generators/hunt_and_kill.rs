use rand::Rng;

use crate::{
    MazeError,
    maze::{Coord, Grid, row_major},
};

/// Walk into unvisited cells until cornered, then hunt for a new place to start.
///
/// The hunt scans the grid from the north-west corner for the first unvisited cell that
/// touches a visited one, links the two and resumes walking there. A hunt that finds
/// nothing means every cell has been visited.
pub fn hunt_and_kill(grid: &mut Grid, rng: &mut impl Rng) -> Result<usize, MazeError> {
    let mut current = Some(grid.random_cell(rng));
    let mut steps = 0;

    while let Some(coord) = current {
        let unvisited = grid[coord]
            .neighbors()
            .filter(|&n| !grid[n].is_visited())
            .collect::<Vec<_>>();

        if !unvisited.is_empty() {
            let neighbor = unvisited[rng.random_range(0..unvisited.len())];
            grid.link(coord, neighbor)?;
            current = Some(neighbor);
        } else {
            current = hunt(grid, rng)?;
        }
        steps += 1;
    }
    Ok(steps)
}

fn hunt(grid: &mut Grid, rng: &mut impl Rng) -> Result<Option<Coord>, MazeError> {
    for candidate in row_major(grid.rows(), grid.columns()) {
        if grid[candidate].is_visited() {
            continue;
        }
        let visited = grid[candidate]
            .neighbors()
            .filter(|&n| grid[n].is_visited())
            .collect::<Vec<_>>();
        if visited.is_empty() {
            continue;
        }

        let neighbor = visited[rng.random_range(0..visited.len())];
        grid.link(candidate, neighbor)?;
        tracing::trace!(%candidate, "hunt found a new starting cell");
        return Ok(Some(candidate));
    }
    Ok(None)
}
