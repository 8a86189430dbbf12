use rand::Rng;

use crate::{
    MazeError,
    maze::{Coord, Grid},
};

/// Row by row, grow a run of cells eastwards and close it with a single northward passage.
///
/// A run is closed at the eastern boundary, or on a coin flip anywhere below the northern
/// row. Closing carves north from one random member of the run; on the northern row that
/// member has no north neighbor, so the whole row becomes one corridor.
pub fn sidewinder(grid: &mut Grid, rng: &mut impl Rng) -> Result<usize, MazeError> {
    let mut steps = 0;
    for row in 0..grid.rows() {
        let mut run: Vec<Coord> = Vec::new();
        for column in 0..grid.columns() {
            let coord = Coord::new(row, column);
            run.push(coord);

            let (north, east) = (grid[coord].north(), grid[coord].east());
            let at_eastern_boundary = east.is_none();
            let at_northern_boundary = north.is_none();
            let should_close_out =
                at_eastern_boundary || (!at_northern_boundary && rng.random_bool(0.5));

            if should_close_out {
                let member = run[rng.random_range(0..run.len())];
                if let Some(member_north) = grid[member].north() {
                    grid.link(member, member_north)?;
                }
                run.clear();
            } else if let Some(east) = east {
                grid.link(coord, east)?;
            }
            steps += 1;
        }
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_north_row_is_a_corridor() {
        let mut rng = get_rng(Some(2));
        let mut grid = Grid::new(7, 8).unwrap();
        sidewinder(&mut grid, &mut rng).unwrap();
        assert_eq!(grid.link_count(), 7 * 8 - 1);
        for column in 0..7 {
            assert!(grid.linked(Coord::new(0, column), Coord::new(0, column + 1)));
        }
    }

    #[test]
    fn test_each_run_has_one_way_north() {
        let mut rng = get_rng(Some(8));
        let mut grid = Grid::new(6, 6).unwrap();
        sidewinder(&mut grid, &mut rng).unwrap();
        // Below the first row, every maximal east-west run owns exactly one northward passage
        for row in 1..6 {
            let mut norths_in_run = 0;
            for column in 0..6 {
                let coord = Coord::new(row, column);
                if grid.linked(coord, Coord::new(row - 1, column)) {
                    norths_in_run += 1;
                }
                let run_continues = column + 1 < 6 && grid.linked(coord, Coord::new(row, column + 1));
                if !run_continues {
                    assert_eq!(norths_in_run, 1, "run ending at {coord}");
                    norths_in_run = 0;
                }
            }
        }
    }
}
