//! # MAZE Library
//!
//! Lowest-cost pathfinding on a bounded 2D grid with randomly placed obstacles.
//!
//! ## Structure
//!
//! ```text
//! maze_library/
//! ── algorithms/     # Grid model, heuristics, A* search
//! ── error.rs        # MazeError / MazeResult
//! ── params.rs       # TOML-backed grid and search parameters
//! ── tools/          # Development utilities (maze_demo)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use maze_library::{AStar, Coord, Grid, SearchOutcome};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let grid = Grid::generate(8, 8, Coord::new(5, 4), Coord::new(2, 7), 0.0, &mut rng).unwrap();
//!
//! let astar = AStar::new(&grid);
//! match astar.search(grid.start(), grid.goal()).unwrap() {
//!     SearchOutcome::Found(path) => assert_eq!(path.last(), Some(grid.goal())),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

pub mod algorithms;
pub mod error;
pub mod params;

pub use algorithms::astar::{AStar, Path, SearchConfig, SearchOutcome, SearchStats};
pub use algorithms::grid::{Coord, Grid, GridSnapshot};
pub use algorithms::heuristic::{Connectivity, Heuristic, StepCosts};
pub use error::{MazeError, MazeResult};
pub use params::{GridParams, MazeParams, SearchParams};
