//! Grid Heuristics and Edge Costs
//!
//! Distance estimates for A* on a grid, and the step-cost model they have
//! to agree with.
//!
//! # Features
//!
//! - Octile distance for 8-connected movement
//! - Manhattan distance for 4-connected movement
//! - Zero heuristic (A* degenerates to Dijkstra)
//! - Explicit orthogonal / diagonal step costs, kept separate from the estimate
//!
//! # Example
//!
//! ```rust
//! use maze_library::algorithms::grid::Coord;
//! use maze_library::algorithms::heuristic::{Heuristic, StepCosts};
//!
//! let costs = StepCosts::default(); // D = 1, D2 = sqrt(2)
//! let h = Heuristic::Octile.estimate(Coord::new(0, 0), Coord::new(2, 3), &costs);
//! assert!((h - (1.0 + 2.0 * std::f64::consts::SQRT_2)).abs() < 1e-9);
//! ```

use super::grid::Coord;
use crate::error::{MazeError, MazeResult};
use serde::{Deserialize, Serialize};

/// 8 neighbor offsets: orthogonal first, then diagonal
const EIGHT_WAY: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// 4 orthogonal neighbor offsets
const FOUR_WAY: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Movement model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// 4 orthogonal + 4 diagonal moves
    #[default]
    Eight,
    /// Orthogonal moves only
    Four,
}

impl Connectivity {
    /// Neighbor offsets as (d_row, d_col)
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Connectivity::Eight => &EIGHT_WAY,
            Connectivity::Four => &FOUR_WAY,
        }
    }
}

/// Edge-cost model for unit moves between adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepCosts {
    /// Cost of an orthogonal step (D)
    pub orthogonal: f64,
    /// Cost of a diagonal step (D2)
    pub diagonal: f64,
}

impl Default for StepCosts {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl StepCosts {
    /// Create validated step costs
    pub fn new(orthogonal: f64, diagonal: f64) -> MazeResult<Self> {
        let costs = Self {
            orthogonal,
            diagonal,
        };
        costs.validate()?;
        Ok(costs)
    }

    /// Orthogonal cost `d` with diagonal `d * sqrt(2)`
    pub fn uniform(d: f64) -> Self {
        Self {
            orthogonal: d,
            diagonal: d * std::f64::consts::SQRT_2,
        }
    }

    /// Check `D2 >= D > 0` and `D2 <= 2D`
    pub fn validate(&self) -> MazeResult<()> {
        let (d, d2) = (self.orthogonal, self.diagonal);
        if !d.is_finite() || d <= 0.0 {
            return Err(MazeError::invalid(format!(
                "orthogonal step cost must be positive and finite, got {}",
                d
            )));
        }
        if !d2.is_finite() || d2 < d || d2 > 2.0 * d {
            return Err(MazeError::invalid(format!(
                "diagonal step cost must lie in [{}, {}], got {}",
                d,
                2.0 * d,
                d2
            )));
        }
        Ok(())
    }

    /// Cost of moving between two adjacent cells
    #[inline]
    pub fn edge_cost(&self, from: Coord, to: Coord) -> f64 {
        debug_assert!(from.is_adjacent(to), "{} and {} are not adjacent", from, to);
        if from.row != to.row && from.col != to.col {
            self.diagonal
        } else {
            self.orthogonal
        }
    }
}

/// Remaining-cost estimate used to order the open set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    /// `D * (dx + dy) + (D2 - 2D) * min(dx, dy)`
    #[default]
    Octile,
    /// `D * (dx + dy)`
    Manhattan,
    /// Always 0
    Zero,
}

impl Heuristic {
    /// Estimate cost from `a` to `b`
    #[inline]
    pub fn estimate(self, a: Coord, b: Coord, costs: &StepCosts) -> f64 {
        let dx = (a.row - b.row).unsigned_abs() as f64;
        let dy = (a.col - b.col).unsigned_abs() as f64;

        match self {
            Heuristic::Octile => {
                costs.orthogonal * (dx + dy)
                    + (costs.diagonal - 2.0 * costs.orthogonal) * dx.min(dy)
            }
            Heuristic::Manhattan => costs.orthogonal * (dx + dy),
            Heuristic::Zero => 0.0,
        }
    }

    /// True if this estimate never overestimates under the given movement model
    pub fn is_admissible(self, connectivity: Connectivity, costs: &StepCosts) -> bool {
        match (self, connectivity) {
            (Heuristic::Manhattan, Connectivity::Eight) => costs.diagonal >= 2.0 * costs.orthogonal,
            _ => true,
        }
    }
}
