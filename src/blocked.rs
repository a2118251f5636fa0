//! Sparse grid representation: dimensions plus a list of blocked cells.
//!
//! This is the input of the stride counter
//! ([`count_paths_sparse`](crate::paths::stride::count_paths_sparse)). Every
//! coordinate is validated on construction: inside the grid, distinct, and
//! never one of the two endpoints. Cells are kept sorted row-major.

use crate::error::GridError;
use crate::grid::{cell_count, CellFlag, Grid, Position};

/// Validated set of blocked coordinates for a `rows × columns` grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockedSet {
    rows: usize,
    columns: usize,
    cells: Vec<Position>,
}

impl BlockedSet {
    pub fn new<I, P>(rows: usize, columns: usize, cells: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        if rows == 0 && columns == 0 {
            return Err(GridError::Empty);
        }
        if rows == 0 || columns == 0 {
            return Err(GridError::DegenerateShape { rows, columns });
        }
        cell_count(rows, columns)?;
        let start = Position::new(0, 0);
        let goal = Position::new(rows - 1, columns - 1);

        let mut sorted: Vec<Position> = Vec::new();
        for position in cells.into_iter().map(Into::<Position>::into) {
            if position.row >= rows || position.column >= columns {
                return Err(GridError::OutOfBounds {
                    position,
                    rows,
                    columns,
                });
            }
            if position == start || position == goal {
                return Err(GridError::BlockedEndpoint(position));
            }
            sorted.push(position);
        }
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(GridError::DuplicateBlocked(pair[0]));
        }

        Ok(Self {
            rows,
            columns,
            cells: sorted,
        })
    }

    /// Collect the blocked cells of a dense grid whose endpoints are open.
    pub fn from_grid(grid: &Grid) -> Result<Self, GridError> {
        grid.check_endpoints()?;
        Self::new(grid.rows(), grid.columns(), grid.blocked_positions())
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Blocked cells, sorted row-major.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.binary_search(&position).is_ok()
    }

    /// Swap rows with columns and every coordinate with its mirror image.
    pub fn transpose(&self) -> BlockedSet {
        let mut cells: Vec<Position> = self.cells.iter().map(|p| p.transposed()).collect();
        cells.sort_unstable();
        BlockedSet {
            rows: self.columns,
            columns: self.rows,
            cells,
        }
    }

    /// Materialise the equivalent dense grid. The shape was bounded in
    /// [`BlockedSet::new`], so the product cannot overflow.
    pub fn to_grid(&self) -> Grid {
        let mut flags = vec![CellFlag::Open; self.rows * self.columns];
        for p in &self.cells {
            flags[p.row * self.columns + p.column] = CellFlag::Blocked;
        }
        Grid::from_validated(self.rows, self.columns, flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_sorted_and_searchable() {
        let set = BlockedSet::new(3, 3, [(2, 0), (1, 1), (0, 2)]).unwrap();
        assert_eq!(
            set.cells(),
            &[
                Position::new(0, 2),
                Position::new(1, 1),
                Position::new(2, 0)
            ]
        );
        assert!(set.contains(Position::new(1, 1)));
        assert!(!set.contains(Position::new(1, 0)));
    }

    #[test]
    fn rejects_bad_coordinates() {
        assert_eq!(
            BlockedSet::new(2, 3, [(2, 0)]),
            Err(GridError::OutOfBounds {
                position: Position::new(2, 0),
                rows: 2,
                columns: 3
            })
        );
        assert_eq!(
            BlockedSet::new(2, 3, [(1, 2)]),
            Err(GridError::BlockedEndpoint(Position::new(1, 2)))
        );
        assert_eq!(
            BlockedSet::new(3, 3, [(1, 1), (0, 1), (1, 1)]),
            Err(GridError::DuplicateBlocked(Position::new(1, 1)))
        );
        assert_eq!(
            BlockedSet::new(0, 0, Vec::<Position>::new()),
            Err(GridError::Empty)
        );
    }

    #[test]
    fn transpose_round_trips_through_dense_grid() {
        let set = BlockedSet::new(2, 4, [(0, 3), (1, 1)]).unwrap();
        let t = set.transpose();
        assert_eq!((t.rows(), t.columns()), (4, 2));
        assert_eq!(t.to_grid(), set.to_grid().transpose());
        assert_eq!(BlockedSet::from_grid(&set.to_grid()).unwrap(), set);
    }
}
