//! Grid and search parameters
//!
//! Loaded from TOML. Every field has a default, so a partial file (or an empty
//! one) is valid. The defaults reproduce the classic 8x8 demo maze.
//!
//! ```toml
//! [grid]
//! rows = 8
//! cols = 8
//! start = { row = 5, col = 4 }
//! goal = { row = 2, col = 7 }
//! obstacle_probability = 0.33
//! seed = 42
//!
//! [search]
//! orthogonal_cost = 50.0
//! diagonal_cost = 70.71067811865476
//! connectivity = "eight"
//! heuristic = "octile"
//! ```

use crate::algorithms::astar::SearchConfig;
use crate::algorithms::grid::{validate_probability, Coord, Grid};
use crate::algorithms::heuristic::{Connectivity, Heuristic, StepCosts};
use crate::error::{MazeError, MazeResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

mod defaults {
    use crate::algorithms::grid::Coord;

    pub fn rows() -> usize {
        8
    }
    pub fn cols() -> usize {
        8
    }
    pub fn start() -> Coord {
        Coord::new(5, 4)
    }
    pub fn goal() -> Coord {
        Coord::new(2, 7)
    }
    pub fn obstacle_probability() -> f64 {
        0.33
    }
    pub fn orthogonal_cost() -> f64 {
        1.0
    }
    pub fn diagonal_cost() -> f64 {
        std::f64::consts::SQRT_2
    }
}

/// Top-level parameter file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MazeParams {
    #[serde(default)]
    pub grid: GridParams,

    #[serde(default)]
    pub search: SearchParams,
}

impl MazeParams {
    /// Parse and validate parameters from a TOML string
    pub fn from_toml_str(text: &str) -> MazeResult<Self> {
        let params: MazeParams = toml::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    /// Read, parse and validate a TOML parameter file
    pub fn load(path: impl AsRef<std::path::Path>) -> MazeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let params = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "loaded maze parameters");
        Ok(params)
    }

    pub fn validate(&self) -> MazeResult<()> {
        self.grid.validate()?;
        self.search.to_search_config().validate()
    }
}

/// Grid section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    #[serde(default = "defaults::rows")]
    pub rows: usize,

    #[serde(default = "defaults::cols")]
    pub cols: usize,

    #[serde(default = "defaults::start")]
    pub start: Coord,

    #[serde(default = "defaults::goal")]
    pub goal: Coord,

    /// Per-cell obstacle probability in [0, 1]
    #[serde(default = "defaults::obstacle_probability")]
    pub obstacle_probability: f64,

    /// RNG seed for reproducible grids (None = caller picks)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            rows: defaults::rows(),
            cols: defaults::cols(),
            start: defaults::start(),
            goal: defaults::goal(),
            obstacle_probability: defaults::obstacle_probability(),
            seed: None,
        }
    }
}

impl GridParams {
    pub fn validate(&self) -> MazeResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MazeError::invalid(format!(
                "grid dimensions must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        validate_probability(self.obstacle_probability)?;
        for cell in [self.start, self.goal] {
            let inside = cell.row >= 0
                && cell.col >= 0
                && (cell.row as usize) < self.rows
                && (cell.col as usize) < self.cols;
            if !inside {
                return Err(MazeError::OutOfBounds {
                    coord: cell,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        }
        Ok(())
    }

    /// Generate a grid from these parameters using `rng`
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> MazeResult<Grid> {
        Grid::generate(
            self.rows,
            self.cols,
            self.start,
            self.goal,
            self.obstacle_probability,
            rng,
        )
    }
}

/// Search section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Orthogonal step cost (D)
    #[serde(default = "defaults::orthogonal_cost")]
    pub orthogonal_cost: f64,

    /// Diagonal step cost (D2)
    #[serde(default = "defaults::diagonal_cost")]
    pub diagonal_cost: f64,

    #[serde(default)]
    pub connectivity: Connectivity,

    #[serde(default)]
    pub heuristic: Heuristic,

    /// Expansion budget (None = unlimited)
    #[serde(default)]
    pub max_expansions: Option<usize>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            orthogonal_cost: defaults::orthogonal_cost(),
            diagonal_cost: defaults::diagonal_cost(),
            connectivity: Connectivity::default(),
            heuristic: Heuristic::default(),
            max_expansions: None,
        }
    }
}

impl SearchParams {
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig {
            costs: StepCosts {
                orthogonal: self.orthogonal_cost,
                diagonal: self.diagonal_cost,
            },
            heuristic: self.heuristic,
            connectivity: self.connectivity,
            max_expansions: self.max_expansions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_file_uses_defaults() {
        let params = MazeParams::from_toml_str("").unwrap();
        assert_eq!(params, MazeParams::default());
        assert_eq!((params.grid.rows, params.grid.cols), (8, 8));
        assert_eq!(params.grid.start, Coord::new(5, 4));
        assert_eq!(params.grid.goal, Coord::new(2, 7));
        assert_relative_eq!(params.search.diagonal_cost, std::f64::consts::SQRT_2);
        assert_eq!(params.search.to_search_config(), SearchConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let text = r#"
            [grid]
            rows = 20
            goal = { row = 19, col = 0 }
            seed = 7

            [search]
            connectivity = "four"
            heuristic = "manhattan"
            max_expansions = 500
        "#;
        let params = MazeParams::from_toml_str(text).unwrap();

        assert_eq!(params.grid.rows, 20);
        assert_eq!(params.grid.cols, 8);
        assert_eq!(params.grid.goal, Coord::new(19, 0));
        assert_eq!(params.grid.seed, Some(7));

        let config = params.search.to_search_config();
        assert_eq!(config.connectivity, Connectivity::Four);
        assert_eq!(config.heuristic, Heuristic::Manhattan);
        assert_eq!(config.max_expansions, Some(500));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = MazeParams::from_toml_str("[grid]\nobstacle_probability = 1.5\n").unwrap_err();
        assert!(matches!(err, MazeError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_start_outside_grid() {
        let err = MazeParams::from_toml_str("[grid]\nrows = 4\ncols = 4\n").unwrap_err();
        // Default start (5, 4) does not fit a 4x4 grid
        assert!(matches!(err, MazeError::OutOfBounds { .. }));
    }

    #[test]
    fn test_rejects_inadmissible_search() {
        let err = MazeParams::from_toml_str("[search]\nheuristic = \"manhattan\"\n").unwrap_err();
        assert!(matches!(err, MazeError::InvalidConfiguration(_)));

        let err = MazeParams::from_toml_str("[search]\ndiagonal_cost = 0.5\n").unwrap_err();
        assert!(matches!(err, MazeError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = MazeParams::from_toml_str("[grid\nrows = ").unwrap_err();
        assert!(matches!(err, MazeError::ConfigParse(_)));

        let err = MazeParams::from_toml_str("[search]\nconnectivity = \"six\"\n").unwrap_err();
        assert!(matches!(err, MazeError::ConfigParse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = MazeParams::load("/nonexistent/maze.toml").unwrap_err();
        assert!(matches!(err, MazeError::Io(_)));
    }

    #[test]
    fn test_build_grid_from_params() {
        let params = GridParams {
            obstacle_probability: 0.0,
            ..GridParams::default()
        };
        let grid = params.build(&mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        assert_eq!(grid.size(), (8, 8));
        assert_eq!(grid.start(), Coord::new(5, 4));
        assert_eq!(grid.blocked_count(), 0);
    }
}
