//! Pure computational algorithms for grid pathfinding
//!
//! No I/O lives here. The grid is built once and never mutated; every search
//! owns its own scratch state, so several searches may share one grid across
//! threads.
//!
//! # Available Algorithms
//!
//! - **grid**: bounded 2D grid with Bernoulli obstacle placement
//! - **heuristic**: octile / Manhattan estimates and the edge-cost model
//! - **astar**: A* best-first search with lazy deletion

pub mod astar;
pub mod grid;
pub mod heuristic;
