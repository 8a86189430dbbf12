use rand::{Rng, SeedableRng, rngs::StdRng};

use std::time::{Duration, Instant};

mod aldous_broder;
mod binary_tree;
mod hunt_and_kill;
mod recur_backtrack;
mod sidewinder;
mod wilson;

pub use aldous_broder::aldous_broder;
pub use binary_tree::binary_tree;
pub use hunt_and_kill::hunt_and_kill;
pub use recur_backtrack::{recursive_backtrack, recursive_backtrack_from};
pub use sidewinder::sidewinder;
pub use wilson::wilson;

use crate::{MazeError, maze::Grid};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    BinaryTree,
    Sidewinder,
    AldousBroder,
    Wilson,
    HuntAndKill,
    RecurBacktrack,
}

impl Generator {
    pub const ALL: [Generator; 6] = [
        Generator::BinaryTree,
        Generator::Sidewinder,
        Generator::AldousBroder,
        Generator::Wilson,
        Generator::HuntAndKill,
        Generator::RecurBacktrack,
    ];

    /// Carve `grid` with this algorithm. Returns the number of steps taken.
    ///
    /// The grid is expected to have no passages yet; [`generate_maze`] takes care of that.
    pub fn carve(self, grid: &mut Grid, rng: &mut impl Rng) -> Result<usize, MazeError> {
        match self {
            Generator::BinaryTree => binary_tree(grid, rng),
            Generator::Sidewinder => sidewinder(grid, rng),
            Generator::AldousBroder => aldous_broder(grid, rng),
            Generator::Wilson => wilson(grid, rng),
            Generator::HuntAndKill => hunt_and_kill(grid, rng),
            Generator::RecurBacktrack => recursive_backtrack(grid, rng),
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::BinaryTree => write!(f, "Binary Tree"),
            Generator::Sidewinder => write!(f, "Sidewinder"),
            Generator::AldousBroder => write!(f, "Aldous-Broder"),
            Generator::Wilson => write!(f, "Wilson's Algorithm"),
            Generator::HuntAndKill => write!(f, "Hunt-and-Kill"),
            Generator::RecurBacktrack => write!(f, "Recursive Backtracker"),
        }
    }
}

/// What a generation run did to the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub generator: Generator,
    /// Main-loop iterations, a rough measure of how hard the algorithm worked.
    pub steps: usize,
    pub links: usize,
    pub deadends: usize,
    pub elapsed: Duration,
}

pub fn generate_maze(
    grid: &mut Grid,
    generator: Generator,
    seed: Option<u64>,
) -> Result<GenerationReport, MazeError> {
    let mut rng = get_rng(seed);
    tracing::debug!(%generator, ?seed, "seeded maze generation");
    generate_maze_with(grid, generator, &mut rng)
}

/// Wipe every passage of `grid` and carve a fresh perfect maze into it.
pub fn generate_maze_with(
    grid: &mut Grid,
    generator: Generator,
    rng: &mut impl Rng,
) -> Result<GenerationReport, MazeError> {
    grid.clear_links();

    tracing::debug!(
        %generator,
        rows = grid.rows(),
        columns = grid.columns(),
        "generating maze"
    );
    let started = Instant::now();
    let steps = generator.carve(grid, rng)?;
    let report = GenerationReport {
        generator,
        steps,
        links: grid.link_count(),
        deadends: grid.deadends().len(),
        elapsed: started.elapsed(),
    };
    tracing::info!(
        %generator,
        steps = report.steps,
        links = report.links,
        deadends = report.deadends,
        elapsed = ?report.elapsed,
        "maze generated"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Coord;
    use proptest::prelude::*;

    /// Every passage is mirrored, there are V - 1 of them and all cells are reachable.
    fn assert_spanning_tree(grid: &Grid) {
        for cell in grid.each_cell() {
            for linked in cell.links() {
                assert!(grid.linked(linked, cell.coord()));
            }
        }
        assert_eq!(grid.link_count(), grid.size() - 1);
        let distances = grid.distances_from(Coord::new(0, 0)).unwrap();
        assert_eq!(distances.len(), grid.size());
    }

    #[test]
    fn test_two_by_two_has_three_links() {
        for generator in Generator::ALL {
            for seed in 0..20 {
                let mut grid = Grid::new(2, 2).unwrap();
                let report = generate_maze(&mut grid, generator, Some(seed)).unwrap();
                assert_eq!(report.links, 3, "{generator} with seed {seed}");
                assert_spanning_tree(&grid);
            }
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        for generator in Generator::ALL {
            let mut first = Grid::new(8, 6).unwrap();
            let mut second = Grid::new(8, 6).unwrap();
            generate_maze(&mut first, generator, Some(42)).unwrap();
            generate_maze(&mut second, generator, Some(42)).unwrap();
            for cell in first.each_cell() {
                assert_eq!(
                    cell.links().collect::<Vec<_>>(),
                    second[cell.coord()].links().collect::<Vec<_>>(),
                    "{generator} diverged at {}",
                    cell.coord()
                );
            }
        }
    }

    #[test]
    fn test_regenerating_starts_from_scratch() {
        let mut grid = Grid::new(5, 5).unwrap();
        generate_maze(&mut grid, Generator::Wilson, Some(1)).unwrap();
        grid.set_distances(grid.distances_from(Coord::new(0, 0)).unwrap());
        let report = generate_maze(&mut grid, Generator::HuntAndKill, Some(2)).unwrap();
        assert_eq!(report.links, 24);
        assert!(grid.distances().is_none());
        assert_spanning_tree(&grid);
    }

    #[test]
    fn test_report_counts_deadends() {
        let mut grid = Grid::new(6, 7).unwrap();
        let report = generate_maze(&mut grid, Generator::RecurBacktrack, Some(9)).unwrap();
        assert_eq!(report.generator, Generator::RecurBacktrack);
        assert_eq!(report.deadends, grid.deadends().len());
        assert!(report.deadends >= 2);
        assert!(report.steps > 0);
    }

    proptest! {
        #[test]
        fn every_generator_carves_a_spanning_tree(
            rows in 2usize..10,
            columns in 2usize..10,
            seed in any::<u64>(),
        ) {
            for generator in Generator::ALL {
                let mut grid = Grid::new(rows, columns).unwrap();
                let report = generate_maze(&mut grid, generator, Some(seed)).unwrap();
                prop_assert_eq!(report.links, rows * columns - 1);
                let reachable = grid.distances_from(grid.random_cell(&mut get_rng(Some(seed))))
                    .unwrap()
                    .len();
                prop_assert_eq!(reachable, rows * columns);
            }
        }
    }
}
