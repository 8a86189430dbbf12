use crate::MazeError;
use crate::maze::{Coord, Grid};

/// A copy of `grid` turned 90 degrees clockwise, passages included.
///
/// Rows become columns: the cell at `(r, c)` moves to `(c, rows - 1 - r)`. Rotating a maze
/// moves the straight corridors Binary Tree and Sidewinder leave along the north edge.
/// Attached distances are not carried over.
pub fn rotate(grid: &Grid) -> Result<Grid, MazeError> {
    let rows = grid.rows();
    let mut rotated = Grid::new(grid.columns(), rows)?;
    for cell in grid.each_cell() {
        let from = rotated_coord(cell.coord(), rows);
        for linked in cell.links() {
            rotated.link(from, rotated_coord(linked, rows))?;
        }
    }
    Ok(rotated)
}

fn rotated_coord(coord: Coord, rows: usize) -> Coord {
    Coord::new(coord.column, rows - 1 - coord.row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;

    #[test]
    fn test_rotate_swaps_dimensions() {
        let grid = Grid::new(2, 5).unwrap();
        let rotated = rotate(&grid).unwrap();
        assert_eq!((rotated.rows(), rotated.columns()), (5, 2));
    }

    #[test]
    fn test_rotate_turns_passages() {
        let mut grid = Grid::new(2, 3).unwrap();
        // East-west passage along the north edge
        grid.link(Coord::new(0, 0), Coord::new(0, 1)).unwrap();
        // North-south passage in the last column
        grid.link(Coord::new(0, 2), Coord::new(1, 2)).unwrap();

        let rotated = rotate(&grid).unwrap();
        assert_eq!(rotated.link_count(), 2);
        // North edge becomes the east edge, running north-south
        assert!(rotated.linked(Coord::new(0, 1), Coord::new(1, 1)));
        assert!(rotated.is_linked_dir(Coord::new(0, 1), Direction::South).unwrap());
        // The vertical passage now runs east-west along the south edge
        assert!(rotated.linked(Coord::new(2, 1), Coord::new(2, 0)));
    }

    #[test]
    fn test_four_rotations_restore_the_maze() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.link(Coord::new(0, 0), Coord::new(1, 0)).unwrap();
        grid.link(Coord::new(1, 0), Coord::new(1, 1)).unwrap();
        grid.link(Coord::new(2, 3), Coord::new(2, 2)).unwrap();

        let mut rotated = grid.clone();
        for _ in 0..4 {
            rotated = rotate(&rotated).unwrap();
        }
        for cell in grid.each_cell() {
            assert_eq!(
                cell.links().collect::<Vec<_>>(),
                rotated[cell.coord()].links().collect::<Vec<_>>()
            );
        }
    }
}
