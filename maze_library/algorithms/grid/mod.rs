//! Bounded 2D Grid with Random Obstacles
//!
//! The static search space for [`crate::AStar`].
//!
//! # Features
//!
//! - Row-major boolean obstacle map, fixed after construction
//! - Independent Bernoulli obstacle trial per cell from an injected RNG
//! - Start and goal cells are always free
//! - Read-only snapshot for renderers
//!
//! # Example
//!
//! ```rust
//! use maze_library::algorithms::grid::{Coord, Grid};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let grid = Grid::generate(8, 8, Coord::new(5, 4), Coord::new(2, 7), 0.33, &mut rng).unwrap();
//!
//! assert!(!grid.is_blocked(grid.start()).unwrap());
//! assert!(!grid.is_blocked(grid.goal()).unwrap());
//! ```

use crate::error::{MazeError, MazeResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Grid cell coordinate
///
/// `row` indexes the first grid dimension and `col` the second. Components are
/// signed so that neighbor offsets can step outside the grid and be rejected by
/// a bounds check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by `(d_row, d_col)`
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// True if `other` is one of the 8 cells surrounding `self`
    pub fn is_adjacent(self, other: Coord) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        self != other && dr <= 1 && dc <= 1
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable 2D obstacle grid
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    start: Coord,
    goal: Coord,
    obstacle_probability: f64,
    blocked: Vec<bool>, // row-major, true = impassable
}

impl Grid {
    /// Create a grid with randomly placed obstacles
    ///
    /// Every cell except `start` and `goal` is blocked with probability
    /// `obstacle_probability`, one independent trial per cell in row-major
    /// order. The same seeded `rng` always yields the same grid.
    ///
    /// # Errors
    /// * `InvalidConfiguration` - zero dimension or probability outside [0, 1]
    /// * `OutOfBounds` - start or goal outside the grid
    pub fn generate<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        start: Coord,
        goal: Coord,
        obstacle_probability: f64,
        rng: &mut R,
    ) -> MazeResult<Self> {
        validate_probability(obstacle_probability)?;
        let mut grid = Self::empty(rows, cols, start, goal)?;
        grid.obstacle_probability = obstacle_probability;

        for row in 0..rows {
            for col in 0..cols {
                let cell = Coord::new(row as i32, col as i32);
                if cell == start || cell == goal {
                    continue;
                }
                if rng.gen_bool(obstacle_probability) {
                    grid.blocked[row * cols + col] = true;
                }
            }
        }

        debug!(
            rows,
            cols,
            blocked = grid.blocked_count(),
            probability = obstacle_probability,
            "generated obstacle grid"
        );
        Ok(grid)
    }

    /// Create a grid from an explicit list of blocked cells
    ///
    /// Entries equal to `start` or `goal` are ignored so both stay free.
    pub fn from_blocked<I>(
        rows: usize,
        cols: usize,
        start: Coord,
        goal: Coord,
        blocked: I,
    ) -> MazeResult<Self>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut grid = Self::empty(rows, cols, start, goal)?;
        for cell in blocked {
            let idx = grid.checked_index(cell)?;
            if cell != start && cell != goal {
                grid.blocked[idx] = true;
            }
        }
        Ok(grid)
    }

    fn empty(rows: usize, cols: usize, start: Coord, goal: Coord) -> MazeResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::invalid(format!(
                "grid dimensions must be at least 1x1, got {}x{}",
                rows, cols
            )));
        }
        if rows > i32::MAX as usize || cols > i32::MAX as usize {
            return Err(MazeError::invalid(format!(
                "grid dimensions {}x{} exceed the coordinate range",
                rows, cols
            )));
        }

        let grid = Self {
            rows,
            cols,
            start,
            goal,
            obstacle_probability: 0.0,
            blocked: vec![false; rows * cols],
        };
        grid.checked_index(start)?;
        grid.checked_index(goal)?;
        Ok(grid)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid dimensions as (rows, cols)
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// Probability used at generation (0.0 for explicit layouts)
    pub fn obstacle_probability(&self) -> f64 {
        self.obstacle_probability
    }

    /// Check if a coordinate lies inside the grid
    pub fn is_in_bounds(&self, cell: Coord) -> bool {
        self.index(cell).is_some()
    }

    /// Check if a cell is blocked
    ///
    /// # Errors
    /// `OutOfBounds` if `cell` lies outside the grid.
    pub fn is_blocked(&self, cell: Coord) -> MazeResult<bool> {
        self.checked_index(cell).map(|idx| self.blocked[idx])
    }

    /// In bounds and not blocked
    #[inline]
    pub fn is_passable(&self, cell: Coord) -> bool {
        matches!(self.index(cell), Some(idx) if !self.blocked[idx])
    }

    /// Total number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Fraction of blocked cells among those eligible for obstacles
    /// (every cell except start and goal)
    pub fn blocked_fraction(&self) -> f64 {
        let reserved = if self.start == self.goal { 1 } else { 2 };
        let eligible = (self.rows * self.cols).saturating_sub(reserved);
        if eligible == 0 {
            return 0.0;
        }
        self.blocked_count() as f64 / eligible as f64
    }

    /// Iterate over blocked cells in row-major order
    pub fn blocked_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        self.blocked
            .iter()
            .enumerate()
            .filter(|(_, blocked)| **blocked)
            .map(move |(idx, _)| Coord::new((idx / cols) as i32, (idx % cols) as i32))
    }

    /// Read-only copy of the obstacle map for renderers
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            rows: self.rows,
            cols: self.cols,
            start: self.start,
            goal: self.goal,
            blocked: self.blocked.clone(),
        }
    }

    #[inline]
    fn index(&self, cell: Coord) -> Option<usize> {
        if cell.row < 0 || cell.col < 0 {
            return None;
        }
        let (row, col) = (cell.row as usize, cell.col as usize);
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    fn checked_index(&self, cell: Coord) -> MazeResult<usize> {
        self.index(cell).ok_or(MazeError::OutOfBounds {
            coord: cell,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

/// Serializable obstacle map handed to external collaborators
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub start: Coord,
    pub goal: Coord,
    /// Row-major, `true` = blocked
    pub blocked: Vec<bool>,
}

pub(crate) fn validate_probability(p: f64) -> MazeResult<()> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(MazeError::invalid(format!(
            "obstacle probability must be within [0, 1], got {}",
            p
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn test_zero_probability_is_open() {
        let grid = Grid::generate(10, 12, Coord::new(0, 0), Coord::new(9, 11), 0.0, &mut rng(1))
            .unwrap();
        assert_eq!(grid.size(), (10, 12));
        assert_eq!(grid.blocked_count(), 0);
    }

    #[test]
    fn test_full_probability_blocks_all_but_endpoints() {
        let start = Coord::new(1, 1);
        let goal = Coord::new(3, 4);
        let grid = Grid::generate(5, 5, start, goal, 1.0, &mut rng(2)).unwrap();

        assert_eq!(grid.blocked_count(), 23);
        assert!(!grid.is_blocked(start).unwrap());
        assert!(!grid.is_blocked(goal).unwrap());
        assert_eq!(grid.blocked_fraction(), 1.0);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = Grid::generate(16, 16, Coord::new(0, 0), Coord::new(15, 15), 0.3, &mut rng(9))
            .unwrap();
        let b = Grid::generate(16, 16, Coord::new(0, 0), Coord::new(15, 15), 0.3, &mut rng(9))
            .unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_invalid_probability() {
        for p in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            let err = Grid::generate(4, 4, Coord::new(0, 0), Coord::new(3, 3), p, &mut rng(0))
                .unwrap_err();
            assert!(matches!(err, MazeError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn test_zero_dimension() {
        let err =
            Grid::generate(0, 4, Coord::new(0, 0), Coord::new(0, 0), 0.1, &mut rng(0)).unwrap_err();
        assert!(matches!(err, MazeError::InvalidConfiguration(_)));

        let err = Grid::from_blocked(3, 0, Coord::new(0, 0), Coord::new(0, 0), Vec::<Coord>::new()).unwrap_err();
        assert!(matches!(err, MazeError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_endpoint_out_of_bounds() {
        let err = Grid::generate(4, 4, Coord::new(0, 0), Coord::new(4, 0), 0.1, &mut rng(0))
            .unwrap_err();
        match err {
            MazeError::OutOfBounds { coord, rows, cols } => {
                assert_eq!(coord, Coord::new(4, 0));
                assert_eq!((rows, cols), (4, 4));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_is_blocked_out_of_bounds() {
        let grid = Grid::from_blocked(3, 3, Coord::new(0, 0), Coord::new(2, 2), Vec::<Coord>::new()).unwrap();
        assert!(grid.is_blocked(Coord::new(-1, 0)).is_err());
        assert!(grid.is_blocked(Coord::new(0, 3)).is_err());
        assert!(!grid.is_in_bounds(Coord::new(3, 0)));
        assert!(grid.is_in_bounds(Coord::new(2, 2)));
        assert!(!grid.is_passable(Coord::new(0, -1)));
    }

    #[test]
    fn test_from_blocked_keeps_endpoints_free() {
        let start = Coord::new(0, 0);
        let goal = Coord::new(2, 2);
        let grid =
            Grid::from_blocked(3, 3, start, goal, [start, goal, Coord::new(1, 1)]).unwrap();

        assert!(!grid.is_blocked(start).unwrap());
        assert!(!grid.is_blocked(goal).unwrap());
        assert!(grid.is_blocked(Coord::new(1, 1)).unwrap());
        assert_eq!(grid.blocked_cells().collect::<Vec<_>>(), vec![Coord::new(1, 1)]);
    }

    #[test]
    fn test_from_blocked_rejects_outside_cells() {
        let result = Grid::from_blocked(3, 3, Coord::new(0, 0), Coord::new(2, 2), [Coord::new(5, 5)]);
        assert!(matches!(result, Err(MazeError::OutOfBounds { .. })));
    }

    #[test]
    fn test_snapshot_layout_is_row_major() {
        let grid =
            Grid::from_blocked(2, 3, Coord::new(0, 0), Coord::new(1, 2), [Coord::new(1, 0)])
                .unwrap();
        let snap = grid.snapshot();
        assert_eq!(snap.blocked, vec![false, false, false, true, false, false]);
    }

    #[test]
    fn test_coord_adjacency() {
        let c = Coord::new(2, 2);
        assert!(c.is_adjacent(Coord::new(1, 1)));
        assert!(c.is_adjacent(Coord::new(2, 3)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(4, 2)));
        assert_eq!(c.offset(-1, 1), Coord::new(1, 3));
        assert_eq!(c.to_string(), "(2, 2)");
    }
}
