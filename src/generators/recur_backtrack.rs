use rand::Rng;

use crate::{
    MazeError,
    maze::{Coord, Grid},
};

/// Depth-first carving from a random cell.
pub fn recursive_backtrack(grid: &mut Grid, rng: &mut impl Rng) -> Result<usize, MazeError> {
    let start = grid.random_cell(rng);
    recursive_backtrack_from(grid, start, rng)
}

/// Depth-first carving from `start`, backtracking with an explicit stack.
///
/// The stack never holds more than one entry per cell, so even large grids do not
/// overflow it.
pub fn recursive_backtrack_from(
    grid: &mut Grid,
    start: Coord,
    rng: &mut impl Rng,
) -> Result<usize, MazeError> {
    grid.cell(start)?;

    // The stack will keep only carved cells
    let mut stack = vec![start];
    let mut steps = 0;

    while let Some(cell) = stack.pop() {
        let neighbors = grid[cell]
            .neighbors()
            .filter(|&n| !grid[n].is_visited())
            .collect::<Vec<_>>();

        if !neighbors.is_empty() {
            let neighbor = neighbors[rng.random_range(0..neighbors.len())];
            grid.link(cell, neighbor)?;
            // Put the cell back first so we can look at another neighbor of this cell later
            stack.push(cell);
            // Put the neighbor to carve the maze in that neighbor's direction
            stack.push(neighbor);
        }
        steps += 1;
    }
    Ok(steps)
}
