#![allow(dead_code)]

use proptest::prelude::*;
use snake_paths::{CellFlag, Grid, Position};

/// Random grid with open corners and roughly a quarter of the cells blocked.
pub fn grid_strategy(max_rows: usize, max_columns: usize) -> impl Strategy<Value = Grid> {
    (1..=max_rows, 1..=max_columns)
        .prop_flat_map(|(rows, columns)| {
            (
                Just(rows),
                Just(columns),
                prop::collection::vec(prop::bool::weighted(0.25), rows * columns),
            )
        })
        .prop_map(|(rows, columns, snakes)| {
            let last = rows * columns - 1;
            let cells = snakes
                .iter()
                .enumerate()
                .map(|(idx, &snake)| {
                    if snake && idx != 0 && idx != last {
                        CellFlag::Blocked
                    } else {
                        CellFlag::Open
                    }
                })
                .collect();
            Grid::new(rows, columns, cells).unwrap()
        })
}

pub fn binomial(n: u64, k: u64) -> u64 {
    let k = k.min(n - k);
    (0..k).fold(1u64, |acc, i| acc * (n - i) / (i + 1))
}

/// Monotone paths by plain recursion on the predecessors of each cell.
pub fn reference_monotone(grid: &Grid) -> u64 {
    fn go(grid: &Grid, row: usize, column: usize) -> u64 {
        if !grid.is_open(Position::new(row, column)) {
            return 0;
        }
        if row == 0 && column == 0 {
            return 1;
        }
        let up = if row > 0 { go(grid, row - 1, column) } else { 0 };
        let left = if column > 0 { go(grid, row, column - 1) } else { 0 };
        up + left
    }
    let goal = grid.goal();
    go(grid, goal.row, goal.column)
}

/// Simple paths by recursive depth-first search with a visited set.
pub fn reference_simple(grid: &Grid) -> u64 {
    fn go(grid: &Grid, at: Position, visited: &mut Vec<bool>) -> u64 {
        if at == grid.goal() {
            return 1;
        }
        let idx = grid.index_of(at);
        visited[idx] = true;
        let mut total = 0;
        let (r, c) = (at.row as isize, at.column as isize);
        for (dr, dc) in [(0, 1), (1, 0), (0, -1), (-1, 0)] {
            let (nr, nc) = (r + dr, c + dc);
            if nr < 0 || nc < 0 {
                continue;
            }
            let next = Position::new(nr as usize, nc as usize);
            if grid.is_open(next) && !visited[grid.index_of(next)] {
                total += go(grid, next, visited);
            }
        }
        visited[idx] = false;
        total
    }
    let mut visited = vec![false; grid.len()];
    go(grid, grid.start(), &mut visited)
}

/// Every step moves to a 4-adjacent open cell and no cell repeats.
pub fn valid_path(grid: &Grid, path: &[Position]) -> bool {
    if path.first() != Some(&grid.start()) || path.last() != Some(&grid.goal()) {
        return false;
    }
    if !path.iter().all(|&p| grid.is_open(p)) {
        return false;
    }
    let adjacent = path.windows(2).all(|w| {
        let dr = w[0].row.abs_diff(w[1].row);
        let dc = w[0].column.abs_diff(w[1].column);
        dr + dc == 1
    });
    let mut seen = path.to_vec();
    seen.sort_unstable();
    seen.dedup();
    adjacent && seen.len() == path.len()
}
