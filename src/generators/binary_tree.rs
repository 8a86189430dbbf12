use rand::Rng;

use crate::{
    MazeError,
    maze::{Grid, row_major},
};

/// Visit every cell and carve either north or east, whichever exist.
///
/// The north-east corner has neither and carves nothing, which is what leaves exactly
/// V - 1 passages. The northern row and the eastern column only ever have one option,
/// so both end up as unbroken corridors.
pub fn binary_tree(grid: &mut Grid, rng: &mut impl Rng) -> Result<usize, MazeError> {
    let mut steps = 0;
    for coord in row_major(grid.rows(), grid.columns()) {
        let cell = &grid[coord];
        let candidates = [cell.north(), cell.east()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        if candidates.is_empty() {
            continue;
        }

        let neighbor = candidates[rng.random_range(0..candidates.len())];
        grid.link(coord, neighbor)?;
        steps += 1;
    }
    Ok(steps)
}
