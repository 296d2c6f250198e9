//! Headless maze demo
//!
//! Builds one random grid from parameters, searches it with A*, and logs the
//! route. With `--json` the obstacle map and path are printed on stdout for an
//! external renderer.

mod cli;

use anyhow::{Context, Result};
use cli::Cli;
use maze_library::{AStar, Coord, GridSnapshot, MazeParams, Path, SearchOutcome, SearchStats};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
enum OutcomeKind {
    Found,
    NoPath,
    BudgetExhausted,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    seed: u64,
    grid: GridSnapshot,
    outcome: OutcomeKind,
    path: Option<&'a Path>,
    stats: SearchStats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut params = match &cli.config {
        Some(path) => MazeParams::load(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => MazeParams::default(),
    };
    cli.apply(&mut params);
    params.validate().context("invalid parameters")?;

    let seed = params
        .grid
        .seed
        .unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let grid = params.grid.build(&mut rng)?;
    info!(
        seed,
        rows = grid.rows(),
        cols = grid.cols(),
        blocked = grid.blocked_count(),
        start = %grid.start(),
        goal = %grid.goal(),
        "grid ready"
    );

    let astar = AStar::with_config(&grid, params.search.to_search_config())?;
    let (outcome, stats) = astar.search_with_stats(grid.start(), grid.goal())?;

    let kind = match &outcome {
        SearchOutcome::Found(path) => {
            info!(
                steps = path.len(),
                cost = path.cost(),
                expanded = stats.expanded,
                "path found"
            );
            info!("route: {}", format_route(path.cells()));
            OutcomeKind::Found
        }
        SearchOutcome::NoPath => {
            warn!(expanded = stats.expanded, "goal is unreachable");
            OutcomeKind::NoPath
        }
        SearchOutcome::BudgetExhausted => {
            warn!(
                expanded = stats.expanded,
                "expansion budget exhausted before reaching the goal"
            );
            OutcomeKind::BudgetExhausted
        }
    };

    if cli.json {
        let report = Report {
            seed,
            grid: grid.snapshot(),
            outcome: kind,
            path: outcome.path(),
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn format_route(cells: &[Coord]) -> String {
    if cells.is_empty() {
        return "(already at goal)".to_string();
    }
    cells
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
