use crate::blocked::BlockedSet;
use crate::error::GridError;
use crate::grid::{cell_count, CellFlag, Grid, Position};

/// Fluent constructor for dense and sparse grids.
///
/// ```
/// use snake_paths::{count_paths, count_paths_sparse, GridBuilder};
///
/// let builder = GridBuilder::new(3, 3).block(1, 1).block(2, 0);
/// assert_eq!(count_paths(&builder.clone().build().unwrap()), 1);
/// assert_eq!(count_paths_sparse(&builder.build_sparse().unwrap()), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GridBuilder {
    rows: usize,
    columns: usize,
    blocked: Vec<Position>,
}

impl GridBuilder {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            blocked: Vec::new(),
        }
    }

    /// Put a snake on `(row, column)`.
    pub fn block(mut self, row: usize, column: usize) -> Self {
        self.blocked.push(Position::new(row, column));
        self
    }

    pub fn block_all<I, P>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        self.blocked
            .extend(cells.into_iter().map(Into::<Position>::into));
        self
    }

    /// Dense grid. Blocking the same cell twice is harmless here.
    pub fn build(self) -> Result<Grid, GridError> {
        let mut cells = vec![CellFlag::Open; cell_count(self.rows, self.columns)?];
        for position in self.blocked {
            if position.row >= self.rows || position.column >= self.columns {
                return Err(GridError::OutOfBounds {
                    position,
                    rows: self.rows,
                    columns: self.columns,
                });
            }
            cells[position.row * self.columns + position.column] = CellFlag::Blocked;
        }
        Grid::new(self.rows, self.columns, cells)
    }

    /// Sparse blocked set, with the stricter validation of [`BlockedSet::new`].
    pub fn build_sparse(self) -> Result<BlockedSet, GridError> {
        BlockedSet::new(self.rows, self.columns, self.blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_build_marks_blocked_cells() {
        let grid = GridBuilder::new(2, 3)
            .block(1, 1)
            .block(1, 1)
            .build()
            .unwrap();
        assert_eq!(grid.to_string(), "OOO\nOSO\n");
    }

    #[test]
    fn out_of_bounds_is_reported() {
        let err = GridBuilder::new(2, 2).block(0, 2).build().unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                position: Position::new(0, 2),
                rows: 2,
                columns: 2
            }
        );
    }

    #[test]
    fn oversized_builds_are_an_error() {
        let too_large = GridError::TooLarge {
            rows: usize::MAX,
            columns: 2,
        };
        let builder = GridBuilder::new(usize::MAX, 2);
        assert_eq!(builder.clone().build().unwrap_err(), too_large);
        assert_eq!(builder.build_sparse().unwrap_err(), too_large);
    }

    #[test]
    fn sparse_build_rejects_duplicates() {
        let err = GridBuilder::new(3, 3)
            .block_all([(1, 1), (1, 1)])
            .build_sparse()
            .unwrap_err();
        assert_eq!(err, GridError::DuplicateBlocked(Position::new(1, 1)));
    }
}
