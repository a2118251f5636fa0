//! Generic explicit-stack path enumerator.
//!
//! This module implements depth-first backtracking without recursion:
//! 1. The active path is a stack of [`Frame`]s, each holding a cell and a
//!    cursor into the rule's candidate moves.
//! 2. The top frame either reports the goal, advances to the next passable
//!    candidate, or is popped as a dead end.
//!
//! Cells on the active path carry a visited marker so that no path repeats a
//! cell. The goal is reported and popped as soon as it is reached, so it never
//! stays marked and can end any number of paths.
//!
//! The engine is generic over implementations of [`MoveRule`].

use std::marker::PhantomData;

use crate::grid::{Grid, Position};
use crate::traits::MoveRule;

/// One cell on the active path plus the index of the next candidate move.
#[derive(Debug, Clone, Copy)]
struct Frame {
    position: Position,
    next_move: usize,
}

impl Frame {
    #[inline]
    fn enter(position: Position) -> Self {
        Self {
            position,
            next_move: 0,
        }
    }

    /// Consume candidates until one is passable.
    #[inline]
    fn advance<R: MoveRule>(&mut self, grid: &Grid, visited: &[bool]) -> Option<Position> {
        while let Some(&direction) = R::DIRECTIONS.get(self.next_move) {
            self.next_move += 1;
            let Some(next) = grid.neighbor(self.position, direction) else {
                continue;
            };
            if grid.is_open(next) && !visited[grid.index_of(next)] {
                return Some(next);
            }
        }
        None
    }
}

/// Depth-first enumerator of start-to-goal paths under the move rule `R`.
///
/// Typical usage:
/// ```
/// use snake_paths::{engine::PathEnumerator, paths::monotone::Monotone, Grid};
///
/// let grid: Grid = "OOO\nOSO\nSOO".parse().unwrap();
/// let paths = PathEnumerator::<Monotone>::new(&grid).collect();
/// assert_eq!(paths.len(), 1);
/// assert_eq!(paths[0].len(), 5);
/// ```
pub struct PathEnumerator<'g, R: MoveRule> {
    grid: &'g Grid,
    _rule: PhantomData<R>,
}

impl<'g, R: MoveRule> PathEnumerator<'g, R> {
    /// Create an enumerator over `grid`.
    ///
    /// # Panics
    /// Panics if the grid is empty or its start or goal cell is blocked.
    pub fn new(grid: &'g Grid) -> Self {
        grid.assert_engine_input();
        Self {
            grid,
            _rule: PhantomData,
        }
    }

    /// The grid this enumerator walks, borrowed for the enumerator's lifetime.
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Walk every path, handing each one to `on_path` as the ordered cells
    /// from start to goal. Returns the number of paths reported.
    ///
    /// Scratch state (stack and visited markers) is allocated per call, so
    /// repeated runs are independent.
    pub fn run<F>(&self, mut on_path: F) -> u64
    where
        F: FnMut(&[Position]),
    {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!(
            "enumerate_paths",
            rule = R::NAME,
            rows = self.grid.rows(),
            columns = self.grid.columns()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let grid = self.grid;
        let goal = grid.goal();
        let mut visited = vec![false; grid.len()];
        let mut stack: Vec<Frame> = Vec::with_capacity(grid.len());
        let mut trail: Vec<Position> = Vec::with_capacity(grid.len());
        let mut found = 0u64;

        let start = grid.start();
        visited[grid.index_of(start)] = true;
        stack.push(Frame::enter(start));
        trail.push(start);

        while let Some(top) = stack.last_mut() {
            let here = top.position;
            let step = if here == goal {
                None
            } else {
                top.advance::<R>(grid, &visited)
            };

            match step {
                Some(next) => {
                    visited[grid.index_of(next)] = true;
                    stack.push(Frame::enter(next));
                    trail.push(next);
                }
                None => {
                    if here == goal {
                        found += 1;
                        on_path(trail.as_slice());
                    }
                    visited[grid.index_of(here)] = false;
                    stack.pop();
                    trail.pop();
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(paths = found, "enumeration finished");

        found
    }

    /// Count paths without looking at them.
    pub fn count(&self) -> u64 {
        self.run(|_| {})
    }

    /// Collect every path in enumeration order.
    pub fn collect(&self) -> Vec<Vec<Position>> {
        let mut paths = Vec::new();
        self.run(|path| paths.push(path.to_vec()));
        paths
    }
}
