//! Error types shared by the grid, the search engine and parameter loading.
//!
//! An unreachable goal is not an error; see [`crate::SearchOutcome::NoPath`].

use crate::algorithms::grid::Coord;
use thiserror::Error;

/// MAZE errors
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("Coordinate {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        coord: Coord,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to read parameters: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse parameters: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl MazeError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        MazeError::InvalidConfiguration(msg.into())
    }
}

/// Result type for MAZE operations
pub type MazeResult<T> = Result<T, MazeError>;
