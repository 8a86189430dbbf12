use indexmap::IndexSet;
use rand::Rng;

use crate::{
    MazeError,
    maze::{Coord, Grid, row_major},
};

/// Loop-erased random walks from unvisited cells until they hit the growing maze.
///
/// One random cell seeds the maze. Each walk starts at a random unvisited cell and keeps
/// its path free of loops: stepping onto a cell already on the path cuts the path back to
/// that cell. Once the walk reaches a cell outside the unvisited set, the whole path is
/// carved. Uniform like Aldous-Broder, but the first walk is the slow one.
pub fn wilson(grid: &mut Grid, rng: &mut impl Rng) -> Result<usize, MazeError> {
    let mut unvisited = row_major(grid.rows(), grid.columns()).collect::<IndexSet<_>>();
    let first = rng.random_range(0..unvisited.len());
    unvisited.swap_remove_index(first);

    let mut steps = 0;
    while !unvisited.is_empty() {
        let mut cell = unvisited[rng.random_range(0..unvisited.len())];
        let mut path: Vec<Coord> = vec![cell];

        while unvisited.contains(&cell) {
            cell = grid[cell]
                .random_neighbor(rng)
                .ok_or(MazeError::NoNeighbors(cell))?;
            match path.iter().position(|&walked| walked == cell) {
                // A -> B -> C -> D -> B becomes A -> B
                Some(position) => path.truncate(position + 1),
                None => path.push(cell),
            }
            steps += 1;
        }

        for pair in path.windows(2) {
            grid.link(pair[0], pair[1])?;
            unvisited.swap_remove(&pair[0]);
        }
        tracing::trace!(path_len = path.len(), remaining = unvisited.len(), "wilson walk carved");
    }
    Ok(steps)
}
