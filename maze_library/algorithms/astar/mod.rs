//! A* Grid Pathfinding
//!
//! Optimal best-first search over a [`Grid`], 8- or 4-connected.
//!
//! # Features
//!
//! - Octile heuristic by default, consistent with the step-cost model
//! - Lazy deletion: superseded open-set entries are skipped when popped
//! - Deterministic tie-breaking (f, then h, then insertion order)
//! - Optional expansion budget
//! - Unreachable goals are an outcome, not an error
//!
//! # Example
//!
//! ```rust
//! use maze_library::algorithms::astar::{AStar, SearchOutcome};
//! use maze_library::algorithms::grid::{Coord, Grid};
//!
//! let grid = Grid::from_blocked(3, 3, Coord::new(0, 0), Coord::new(2, 2), [Coord::new(1, 1)]).unwrap();
//! let astar = AStar::new(&grid);
//!
//! if let SearchOutcome::Found(path) = astar.search(grid.start(), grid.goal()).unwrap() {
//!     assert_eq!(path.len(), 3);
//!     println!("cost {:.3}", path.cost());
//! }
//! ```

use super::grid::{Coord, Grid};
use super::heuristic::{Connectivity, Heuristic, StepCosts};
use crate::error::{MazeError, MazeResult};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use tracing::debug;


/// Search configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchConfig {
    /// Edge-cost model
    pub costs: StepCosts,
    /// Remaining-cost estimate
    pub heuristic: Heuristic,
    /// Neighbor set
    pub connectivity: Connectivity,
    /// Give up after this many node expansions (None = unlimited)
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn with_costs(mut self, costs: StepCosts) -> Self {
        self.costs = costs;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Reject step costs or heuristic/movement pairs that break optimality
    pub fn validate(&self) -> MazeResult<()> {
        self.costs.validate()?;
        if !self
            .heuristic
            .is_admissible(self.connectivity, &self.costs)
        {
            return Err(MazeError::invalid(format!(
                "{:?} heuristic overestimates with {:?} connectivity",
                self.heuristic, self.connectivity
            )));
        }
        Ok(())
    }
}

/// A found route
///
/// `cells` runs from the first step after the start up to and including the
/// goal. The start itself is not included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    cells: Vec<Coord>,
    cost: f64,
}

impl Path {
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Coord> {
        self.cells
    }

    /// Total edge cost from the start
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when start == goal
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn last(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    /// Recompute the cost of walking `cells` from `start`
    ///
    /// Returns `None` if two consecutive cells are not adjacent.
    pub fn cost_of(start: Coord, cells: &[Coord], costs: &StepCosts) -> Option<f64> {
        let mut prev = start;
        let mut total = 0.0;
        for &cell in cells {
            if !prev.is_adjacent(cell) {
                return None;
            }
            total += costs.edge_cost(prev, cell);
            prev = cell;
        }
        Some(total)
    }
}

/// Result of a search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Goal reached
    Found(Path),
    /// Open set exhausted without reaching the goal
    NoPath,
    /// `max_expansions` reached before the goal was popped
    BudgetExhausted,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Work counters for one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SearchStats {
    /// Nodes whose neighbors were examined
    pub expanded: usize,
    /// Entries pushed onto the open set
    pub pushed: usize,
    /// Superseded entries popped and discarded
    pub stale_skipped: usize,
}

/// Open set entry, ordered for a min-heap on f
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f_score: f64,
    h_score: f64,
    g_score: f64,
    seq: u64, // Tie-breaker: earlier pushes first
    cell: Coord,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (lowest f_score first)
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.h_score.total_cmp(&self.h_score))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// A* search engine over a borrowed, immutable grid
///
/// Each call to [`AStar::search`] owns its own scores and open set, so one
/// `AStar` (or one `Grid`) can serve concurrent searches from several threads.
#[derive(Debug, Clone)]
pub struct AStar<'g> {
    grid: &'g Grid,
    config: SearchConfig,
}

impl<'g> AStar<'g> {
    /// Create a search engine with the default configuration
    /// (octile heuristic, 8-connected, D = 1, D2 = sqrt(2), no budget)
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            config: SearchConfig::default(),
        }
    }

    /// Create a search engine with a validated configuration
    pub fn with_config(grid: &'g Grid, config: SearchConfig) -> MazeResult<Self> {
        config.validate()?;
        Ok(Self { grid, config })
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find a lowest-cost path from `start` to `goal`
    ///
    /// # Errors
    /// `OutOfBounds` if either endpoint lies outside the grid. A blocked
    /// endpoint is not an error and yields [`SearchOutcome::NoPath`].
    pub fn search(&self, start: Coord, goal: Coord) -> MazeResult<SearchOutcome> {
        self.search_with_stats(start, goal).map(|(outcome, _)| outcome)
    }

    /// Same as [`AStar::search`], also returning work counters
    pub fn search_with_stats(
        &self,
        start: Coord,
        goal: Coord,
    ) -> MazeResult<(SearchOutcome, SearchStats)> {
        let start_blocked = self.grid.is_blocked(start)?;
        let goal_blocked = self.grid.is_blocked(goal)?;

        let mut stats = SearchStats::default();
        if start_blocked || goal_blocked {
            debug!(%start, %goal, start_blocked, goal_blocked, "endpoint blocked");
            return Ok((SearchOutcome::NoPath, stats));
        }

        let costs = &self.config.costs;
        let heuristic = self.config.heuristic;

        let mut g_score: HashMap<Coord, f64> = HashMap::new();
        let mut came_from: HashMap<Coord, Coord> = HashMap::new();
        let mut open_set = BinaryHeap::new();
        let mut seq: u64 = 0;

        let h_start = heuristic.estimate(start, goal, costs);
        g_score.insert(start, 0.0);
        open_set.push(OpenEntry {
            f_score: h_start,
            h_score: h_start,
            g_score: 0.0,
            seq,
            cell: start,
        });
        stats.pushed += 1;

        while let Some(entry) = open_set.pop() {
            let current = entry.cell;
            let best_g = match g_score.get(&current) {
                Some(&g) => g,
                None => continue,
            };

            // Superseded by a cheaper push for the same cell
            if entry.g_score > best_g {
                stats.stale_skipped += 1;
                continue;
            }

            if current == goal {
                let path = Path {
                    cells: reconstruct_path(&came_from, current),
                    cost: best_g,
                };
                debug!(
                    %start,
                    %goal,
                    steps = path.len(),
                    cost = path.cost(),
                    expanded = stats.expanded,
                    "path found"
                );
                return Ok((SearchOutcome::Found(path), stats));
            }

            if let Some(limit) = self.config.max_expansions {
                if stats.expanded >= limit {
                    debug!(%start, %goal, limit, "expansion budget exhausted");
                    return Ok((SearchOutcome::BudgetExhausted, stats));
                }
            }
            stats.expanded += 1;

            for &(d_row, d_col) in self.config.connectivity.offsets() {
                let neighbor = current.offset(d_row, d_col);
                if !self.grid.is_passable(neighbor) {
                    continue;
                }

                let tentative_g = best_g + costs.edge_cost(current, neighbor);
                let improved = g_score
                    .get(&neighbor)
                    .map_or(true, |&known| tentative_g < known);

                if improved {
                    g_score.insert(neighbor, tentative_g);
                    came_from.insert(neighbor, current);

                    let h = heuristic.estimate(neighbor, goal, costs);
                    seq += 1;
                    open_set.push(OpenEntry {
                        f_score: tentative_g + h,
                        h_score: h,
                        g_score: tentative_g,
                        seq,
                        cell: neighbor,
                    });
                    stats.pushed += 1;
                }
            }
        }

        debug!(%start, %goal, expanded = stats.expanded, "no path");
        Ok((SearchOutcome::NoPath, stats))
    }
}

/// Walk predecessors back from `current` until a cell with none is reached
fn reconstruct_path(came_from: &HashMap<Coord, Coord>, mut current: Coord) -> Vec<Coord> {
    let mut cells = Vec::new();
    while let Some(&prev) = came_from.get(&current) {
        cells.push(current);
        current = prev;
    }
    cells.reverse();
    cells
}
