//! Enumeration of right/down paths.
//!
//! Right is always tried before down, so the first path reported runs along
//! the top row and then down the last column, and the last one runs down the
//! first column and then along the bottom row.

use crate::engine::PathEnumerator;
use crate::grid::{Direction, Grid, Position};
use crate::traits::MoveRule;

/// Right, then down.
#[derive(Debug, Clone, Copy, Default)]
pub struct Monotone;

impl MoveRule for Monotone {
    const DIRECTIONS: &'static [Direction] = &[Direction::Right, Direction::Down];
    const NAME: &'static str = "monotone";
}

/// Report every right/down path to `on_path` and return how many there are.
///
/// The count always equals [`count_paths`](crate::paths::dense::count_paths)
/// for the same grid (below saturation).
///
/// # Panics
/// Panics if the grid is empty or its start or goal cell is blocked.
pub fn enumerate_monotone_paths<F>(grid: &Grid, on_path: F) -> u64
where
    F: FnMut(&[Position]),
{
    PathEnumerator::<Monotone>::new(grid).run(on_path)
}
