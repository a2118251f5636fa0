//! Error type shared by grid construction and engine preconditions.

use crate::grid::Position;
use thiserror::Error;

/// Everything that can make a grid or blocked-cell set unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("a {rows}x{columns} grid needs {expected} cells, got {found}")]
    ShapeMismatch {
        rows: usize,
        columns: usize,
        expected: usize,
        found: usize,
    },

    #[error("a {rows}x{columns} grid has more cells than fit in memory")]
    TooLarge { rows: usize, columns: usize },

    #[error("grid is {rows}x{columns}; rows and columns must both be zero or both be non-zero")]
    DegenerateShape { rows: usize, columns: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell character {ch:?} at row {row}, column {column}")]
    UnknownCell { ch: char, row: usize, column: usize },

    #[error("grid is empty")]
    Empty,

    #[error("start cell {0} is blocked")]
    StartBlocked(Position),

    #[error("goal cell {0} is blocked")]
    GoalBlocked(Position),

    #[error("blocked cell {position} lies outside a {rows}x{columns} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        columns: usize,
    },

    #[error("blocked cell {0} coincides with an endpoint")]
    BlockedEndpoint(Position),

    #[error("blocked cell {0} is listed more than once")]
    DuplicateBlocked(Position),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_cell() {
        let err = GridError::StartBlocked(Position::new(0, 0));
        assert_eq!(err.to_string(), "start cell (0, 0) is blocked");

        let err = GridError::OutOfBounds {
            position: Position::new(3, 1),
            rows: 3,
            columns: 3,
        };
        assert_eq!(
            err.to_string(),
            "blocked cell (3, 1) lies outside a 3x3 grid"
        );
    }
}
