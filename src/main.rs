use mazeweave::stats::{SurveyConfig, survey};

/// Usage: `mazeweave [rows] [columns] [tries] [seed] [pathfinding]`
///
/// Missing or unparsable arguments fall back to the defaults of [`SurveyConfig`].
fn parse_args(mut args: impl Iterator<Item = String>) -> SurveyConfig {
    let defaults = SurveyConfig::default();
    let mut next_number = |default: usize| {
        args.next()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(default)
    };
    let rows = next_number(defaults.rows);
    let columns = next_number(defaults.columns);
    let tries = next_number(defaults.tries);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());
    let pathfinding = args
        .next()
        .map(|s| matches!(s.to_lowercase().as_str(), "1" | "y" | "yes" | "t" | "true"))
        .unwrap_or(defaults.pathfinding);

    SurveyConfig {
        rows,
        columns,
        tries,
        seed,
        pathfinding,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to a file so the report on stdout stays readable
    let file_appender = tracing_appender::rolling::never(".", "mazeweave.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let config = parse_args(args);
    let size = config.rows * config.columns;

    println!(
        "Rows: {}\nColumns: {}\nTotal cells: {}\nRuns per algorithm: {}",
        config.rows,
        config.columns,
        size,
        config.tries.max(1)
    );
    println!("Pathfinding: {}", config.pathfinding);

    let mut results = survey(&config)?;

    println!("\nAverage dead-ends (dead-ends/total cells, sorted by % desc):");
    for stats in &results {
        println!(
            " {:>22}: {:03.0}/{:03} ({:.2}%)",
            stats.generator.to_string(),
            stats.average_deadends,
            size,
            stats.deadend_ratio * 100.0
        );
    }

    results.sort_by(|a, b| b.generation.average.cmp(&a.generation.average));
    println!("\nGeneration speed benchmark (seconds, sorted by average desc):");
    for stats in &results {
        println!(
            " {:>22}: avg: {:03.6} min: {:03.6} max: {:03.6}",
            stats.generator.to_string(),
            stats.generation.average.as_secs_f64(),
            stats.generation.min.as_secs_f64(),
            stats.generation.max.as_secs_f64()
        );
    }

    if config.pathfinding {
        results.sort_by_key(|stats| std::cmp::Reverse(stats.pathfinding.map(|t| t.average)));
        println!("\nPathfinding speed benchmark (seconds, sorted by average desc):");
        for stats in &results {
            let Some(timings) = stats.pathfinding else {
                continue;
            };
            println!(
                " {:>22}: avg: {:03.6} min: {:03.6} max: {:03.6}",
                stats.generator.to_string(),
                timings.average.as_secs_f64(),
                timings.min.as_secs_f64(),
                timings.max.as_secs_f64()
            );
        }
    }

    Ok(())
}
