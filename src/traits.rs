//! Move rules for the depth-first path enumerator.
//!
//! To plug a movement policy into [`PathEnumerator`](crate::engine::PathEnumerator),
//! implement [`MoveRule`] on a zero-sized marker type. The rule only decides
//! *which* unit moves exist and in what order they are tried; bounds, snakes
//! and the no-revisit constraint are enforced by the engine for every rule.

use crate::grid::Direction;

/// Ordered set of candidate moves tried from every cell on the active path.
///
/// Semantics:
/// - From a cell, candidates are tried in slice order; the first passable one
///   (inside the grid, open, not already on the path) is taken.
/// - When the search later backtracks to that cell, it resumes with the next
///   candidate in the slice.
/// - Once the slice is exhausted the cell is a dead end and is popped.
///
/// The order therefore fixes the order in which paths are reported.
pub trait MoveRule {
    /// Candidate moves, highest priority first.
    const DIRECTIONS: &'static [Direction];

    /// Short label used in instrumentation and probe output.
    const NAME: &'static str;
}
