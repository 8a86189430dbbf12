//! Side-by-side comparison of the generators: how many dead ends they leave and how long
//! they (and solving their mazes) take.

use std::time::{Duration, Instant};

use crate::{
    MazeError,
    generators::{Generator, generate_maze_with, get_rng},
    maze::Grid,
    solvers::solve_longest_path,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyConfig {
    pub rows: usize,
    pub columns: usize,
    /// Mazes generated per algorithm. Zero is treated as one.
    pub tries: usize,
    /// Seed for the whole survey, or `None` for OS entropy.
    pub seed: Option<u64>,
    /// Also time solving each maze along its longest path.
    pub pathfinding: bool,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            columns: 20,
            tries: 100,
            seed: None,
            pathfinding: true,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub min: Duration,
    pub max: Duration,
    pub average: Duration,
}

impl Timings {
    fn from_samples(samples: &[Duration]) -> Option<Self> {
        let min = samples.iter().min().copied()?;
        let max = samples.iter().max().copied()?;
        let total = samples.iter().sum::<Duration>();
        Some(Timings {
            min,
            max,
            average: total / samples.len() as u32,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorStats {
    pub generator: Generator,
    pub average_deadends: f64,
    /// Average dead ends as a share of all cells, between 0 and 1.
    pub deadend_ratio: f64,
    pub generation: Timings,
    pub pathfinding: Option<Timings>,
}

/// Run every generator `config.tries` times.
///
/// Results are sorted by dead-end ratio, highest first.
pub fn survey(config: &SurveyConfig) -> Result<Vec<GeneratorStats>, MazeError> {
    let tries = config.tries.max(1);
    let mut rng = get_rng(config.seed);
    let mut grid = Grid::new(config.rows, config.columns)?;
    let size = grid.size() as f64;

    tracing::info!(
        rows = config.rows,
        columns = config.columns,
        tries,
        pathfinding = config.pathfinding,
        "starting survey"
    );

    let mut results = Vec::with_capacity(Generator::ALL.len());
    for generator in Generator::ALL {
        tracing::info!(%generator, "surveying");
        let mut generation_timings = Vec::with_capacity(tries);
        let mut pathfinding_timings = Vec::with_capacity(tries);
        let mut total_deadends = 0;

        for _ in 0..tries {
            let report = generate_maze_with(&mut grid, generator, &mut rng)?;
            total_deadends += report.deadends;
            generation_timings.push(report.elapsed);

            if config.pathfinding {
                let started = Instant::now();
                solve_longest_path(&mut grid)?;
                pathfinding_timings.push(started.elapsed());
            }
        }

        let average_deadends = total_deadends as f64 / tries as f64;
        results.push(GeneratorStats {
            generator,
            average_deadends,
            deadend_ratio: average_deadends / size,
            generation: Timings::from_samples(&generation_timings).unwrap_or_default(),
            pathfinding: Timings::from_samples(&pathfinding_timings),
        });
    }

    results.sort_by(|a, b| b.deadend_ratio.total_cmp(&a.deadend_ratio));
    Ok(results)
}
