use clap::Parser;
use maze_library::MazeParams;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "maze_demo")]
#[command(about = "Generate a random maze and solve it with A*", long_about = None)]
pub struct Cli {
    /// TOML parameter file (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// RNG seed for obstacle placement
    #[arg(short, long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub rows: Option<usize>,

    #[arg(long)]
    pub cols: Option<usize>,

    /// Per-cell obstacle probability
    #[arg(short, long)]
    pub probability: Option<f64>,

    /// Give up after this many expansions
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Print the grid, path and stats as JSON on stdout
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Command-line values override the parameter file
    pub fn apply(&self, params: &mut MazeParams) {
        if let Some(seed) = self.seed {
            params.grid.seed = Some(seed);
        }
        if let Some(rows) = self.rows {
            params.grid.rows = rows;
        }
        if let Some(cols) = self.cols {
            params.grid.cols = cols;
        }
        if let Some(p) = self.probability {
            params.grid.obstacle_probability = p;
        }
        if let Some(limit) = self.max_expansions {
            params.search.max_expansions = Some(limit);
        }
    }
}
