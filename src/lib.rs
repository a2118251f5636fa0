//! Lattice paths through grids with snakes.
//!
//! A rabbit starts in the top-left cell of a rectangular grid and wants to
//! reach the bottom-right cell. Some cells hold snakes and may never be
//! entered. This crate answers two questions about such grids:
//!
//! 1. How many *monotone* paths (right/down moves only) reach the goal?
//! 2. Which paths are there, either monotone or *simple* (any of the four
//!    axis-aligned moves, never revisiting a cell)?
//!
//! ## Quick start
//! ```
//! use snake_paths::{count_paths, enumerate_monotone_paths, Grid};
//!
//! let grid: Grid = "OOO\nOSO\nSOO".parse().unwrap();
//! assert_eq!(count_paths(&grid), 1);
//!
//! let mut seen = Vec::new();
//! let n = enumerate_monotone_paths(&grid, |path| seen.push(path.len()));
//! assert_eq!(n, 1);
//! assert_eq!(seen, vec![5]);
//! ```
//!
//! ## Engines
//! The `paths` module contains one independent solution per question:
//! - dense DP table over a [`Grid`],
//! - rolling-array DP over a sparse [`BlockedSet`], using memory
//!   proportional to the shorter grid side,
//! - explicit-stack enumeration of monotone paths,
//! - explicit-stack enumeration of 4-directional simple paths.
//!
//! Every call owns its scratch state, so engines may run concurrently on
//! shared grids; see [`batch`] for the `parallel` feature.
//!
//! Engine preconditions (non-empty grid, open start and goal) are contract
//! violations and panic; use [`Grid::check_endpoints`] to validate first.

pub mod batch;
pub mod blocked;
pub mod builder;
pub mod engine;
pub mod error;
pub mod grid;
pub mod paths;
pub mod traits;
pub mod utils;

pub use crate::blocked::BlockedSet;
pub use crate::builder::GridBuilder;
pub use crate::engine::PathEnumerator;
pub use crate::error::GridError;
pub use crate::grid::{CellFlag, Direction, Grid, Position};
pub use crate::paths::dense::count_paths;
pub use crate::paths::monotone::enumerate_monotone_paths;
pub use crate::paths::simple::enumerate_all_simple_paths;
pub use crate::paths::stride::count_paths_sparse;
pub use crate::traits::MoveRule;
