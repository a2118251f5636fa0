//! Monotone path counting with a full DP table.
//!
//! `table[r][c]` holds the number of right/down paths from the start to
//! `(r, c)`. Blocked cells hold zero, the first row and column are filled by
//! forward accumulation and every other cell is `table[r-1][c] + table[r][c-1]`.

use crate::grid::Grid;

/// Count right/down paths from the top-left to the bottom-right cell.
///
/// Counts saturate at `u64::MAX`.
///
/// # Panics
/// Panics if the grid is empty or its start or goal cell is blocked.
pub fn count_paths(grid: &Grid) -> u64 {
    grid.assert_engine_input();

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!(
        "count_paths_dense",
        rows = grid.rows(),
        columns = grid.columns()
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let rows = grid.rows();
    let columns = grid.columns();
    let cells = grid.cells();
    let mut table = vec![0u64; grid.len()];
    table[0] = 1;

    // First row: a cell is reachable only along the row.
    for c in 1..columns {
        if table[c - 1] == 1 && cells[c].is_open() {
            table[c] = 1;
        }
    }
    // First column.
    for r in 1..rows {
        let idx = r * columns;
        if table[idx - columns] == 1 && cells[idx].is_open() {
            table[idx] = 1;
        }
    }

    for r in 1..rows {
        for c in 1..columns {
            let idx = r * columns + c;
            if cells[idx].is_open() {
                let up = table[idx - columns];
                let left = table[idx - 1];
                table[idx] = up.saturating_add(left);
            }
        }
    }

    table[grid.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GridBuilder;

    fn count(rows: usize, columns: usize, blocked: &[(usize, usize)]) -> u64 {
        let grid = GridBuilder::new(rows, columns)
            .block_all(blocked.iter().copied())
            .build()
            .unwrap();
        count_paths(&grid)
    }

    #[test]
    fn open_square() {
        assert_eq!(count(3, 3, &[]), 6);
        assert_eq!(count(4, 4, &[]), 20);
    }

    #[test]
    fn snakes_on_three_by_three() {
        assert_eq!(count(3, 3, &[(1, 1), (2, 0)]), 1);
        assert_eq!(count(3, 3, &[(0, 2), (1, 1), (2, 0)]), 0);
        assert_eq!(count(3, 3, &[(0, 1), (1, 0)]), 0);
        assert_eq!(count(3, 3, &[(1, 2), (2, 1)]), 0);
    }

    #[test]
    fn rectangular_grids() {
        assert_eq!(count(2, 3, &[(1, 1)]), 1);
        assert_eq!(count(3, 2, &[(1, 0)]), 1);
        assert_eq!(count(3, 2, &[(1, 1)]), 1);
    }

    #[test]
    fn single_lines() {
        assert_eq!(count(1, 1, &[]), 1);
        assert_eq!(count(1, 5, &[]), 1);
        assert_eq!(count(5, 1, &[(2, 0)]), 0);
    }

    #[test]
    fn large_open_grid_saturates() {
        let grid = Grid::open(80, 80).unwrap();
        assert_eq!(count_paths(&grid), u64::MAX);
    }

    #[test]
    #[should_panic(expected = "goal cell (1, 1) is blocked")]
    fn blocked_goal_panics() {
        let grid: Grid = "OO\nOS".parse().unwrap();
        count_paths(&grid);
    }
}
