//! Enumeration of 4-directional simple paths.
//!
//! Moves are tried right, down, left, up. A cell may not be re-entered while
//! it is on the active path; once the search backtracks past it, the cell is
//! available to sibling branches again. This is plain exhaustive
//! backtracking: the number of simple paths has no DP shortcut.

use crate::engine::PathEnumerator;
use crate::grid::{Direction, Grid, Position};
use crate::traits::MoveRule;

/// Right, down, left, then up.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unrestricted;

impl MoveRule for Unrestricted {
    const DIRECTIONS: &'static [Direction] = &[
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
    const NAME: &'static str = "simple";
}

/// Report every simple start-to-goal path to `on_path` and return how many
/// there are.
///
/// # Panics
/// Panics if the grid is empty or its start or goal cell is blocked.
pub fn enumerate_all_simple_paths<F>(grid: &Grid, on_path: F) -> u64
where
    F: FnMut(&[Position]),
{
    PathEnumerator::<Unrestricted>::new(grid).run(on_path)
}
