//! Dense grid model shared by every engine.
//!
//! A [`Grid`] is an immutable `rows × columns` matrix of [`CellFlag`]s stored
//! row-major, so a cell is addressable either by a [`Position`] or by its
//! linear index `row * columns + column`. The start cell is the top-left
//! corner and the goal cell is the bottom-right corner.
//!
//! Grids can be written as text, one line per row:
//! ```
//! use snake_paths::grid::{Grid, Position};
//!
//! let grid: Grid = "OOO\nOSO\nSOO".parse().unwrap();
//! assert_eq!(grid.rows(), 3);
//! assert!(!grid.is_open(Position::new(1, 1)));
//! assert_eq!(grid.to_string(), "OOO\nOSO\nSOO\n");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellFlag {
    /// A snake lives here; no path may enter the cell.
    Blocked,
    Open,
}

impl CellFlag {
    /// Parse one cell of the text format: `O`/`.` open, `S`/`#` blocked.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'O' | 'o' | '.' => Some(CellFlag::Open),
            'S' | 's' | '#' => Some(CellFlag::Blocked),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            CellFlag::Open => 'O',
            CellFlag::Blocked => 'S',
        }
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self == CellFlag::Open
    }
}

/// A `(row, column)` coordinate. Orders row first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Swap the two coordinates.
    #[inline]
    pub const fn transposed(self) -> Self {
        Self {
            row: self.column,
            column: self.row,
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Axis-aligned unit move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// Step one cell from `from`, or `None` if the move leaves a
    /// `rows × columns` grid.
    #[inline]
    pub fn step(self, from: Position, rows: usize, columns: usize) -> Option<Position> {
        let Position { row, column } = from;
        match self {
            Direction::Right if column + 1 < columns => Some(Position::new(row, column + 1)),
            Direction::Down if row + 1 < rows => Some(Position::new(row + 1, column)),
            Direction::Left if column > 0 => Some(Position::new(row, column - 1)),
            Direction::Up if row > 0 => Some(Position::new(row - 1, column)),
            _ => None,
        }
    }
}

/// Number of cells in a `rows × columns` grid, or [`GridError::TooLarge`]
/// when that many flags could never be allocated.
pub(crate) fn cell_count(rows: usize, columns: usize) -> Result<usize, GridError> {
    rows.checked_mul(columns)
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or(GridError::TooLarge { rows, columns })
}

/// Immutable rectangular grid of cell flags in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<CellFlag>,
}

impl Grid {
    /// Wrap row-major `cells` as a `rows × columns` grid.
    ///
    /// Rows and columns must both be non-zero, or both zero for an explicitly
    /// empty grid, and `cells.len()` must equal `rows * columns`.
    pub fn new(rows: usize, columns: usize, cells: Vec<CellFlag>) -> Result<Self, GridError> {
        if (rows == 0) != (columns == 0) {
            return Err(GridError::DegenerateShape { rows, columns });
        }
        let expected = cell_count(rows, columns)?;
        if cells.len() != expected {
            return Err(GridError::ShapeMismatch {
                rows,
                columns,
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// A grid with every cell open.
    pub fn open(rows: usize, columns: usize) -> Result<Self, GridError> {
        let len = cell_count(rows, columns)?;
        Self::new(rows, columns, vec![CellFlag::Open; len])
    }

    /// The explicitly empty `0 × 0` grid.
    pub fn empty() -> Self {
        Self {
            rows: 0,
            columns: 0,
            cells: Vec::new(),
        }
    }

    /// Wrap cells whose shape the caller has already validated.
    pub(crate) fn from_validated(rows: usize, columns: usize, cells: Vec<CellFlag>) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);
        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Build from a slice of equally long rows.
    pub fn from_rows<R: AsRef<[CellFlag]>>(rows: &[R]) -> Result<Self, GridError> {
        let columns = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(cell_count(rows.len(), columns)?);
        for (row, cells_in_row) in rows.iter().enumerate() {
            let cells_in_row = cells_in_row.as_ref();
            if cells_in_row.len() != columns {
                return Err(GridError::RaggedRow {
                    row,
                    expected: columns,
                    found: cells_in_row.len(),
                });
            }
            cells.extend_from_slice(cells_in_row);
        }
        Self::new(rows.len(), columns, cells)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major cell storage.
    pub fn cells(&self) -> &[CellFlag] {
        &self.cells
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.column < self.columns
    }

    /// Linear index of an in-bounds position.
    #[inline]
    pub fn index_of(&self, position: Position) -> usize {
        debug_assert!(self.contains(position), "{position} outside grid");
        position.row * self.columns + position.column
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        debug_assert!(index < self.len(), "index {index} outside grid");
        Position::new(index / self.columns, index % self.columns)
    }

    pub fn get(&self, position: Position) -> Option<CellFlag> {
        if self.contains(position) {
            Some(self.cells[self.index_of(position)])
        } else {
            None
        }
    }

    /// `true` iff the position is inside the grid and not blocked.
    #[inline]
    pub fn is_open(&self, position: Position) -> bool {
        self.get(position).is_some_and(CellFlag::is_open)
    }

    #[inline]
    pub fn start(&self) -> Position {
        Position::new(0, 0)
    }

    #[inline]
    pub fn goal(&self) -> Position {
        Position::new(self.rows.saturating_sub(1), self.columns.saturating_sub(1))
    }

    /// Neighbour of `position` in `direction`, if it stays inside the grid.
    #[inline]
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        direction.step(position, self.rows, self.columns)
    }

    /// Positions of all blocked cells in row-major order.
    pub fn blocked_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, flag)| !flag.is_open())
            .map(move |(idx, _)| self.position_of(idx))
    }

    /// Check the engine preconditions: non-empty, open start, open goal.
    pub fn check_endpoints(&self) -> Result<(), GridError> {
        if self.is_empty() {
            return Err(GridError::Empty);
        }
        if !self.is_open(self.start()) {
            return Err(GridError::StartBlocked(self.start()));
        }
        if !self.is_open(self.goal()) {
            return Err(GridError::GoalBlocked(self.goal()));
        }
        Ok(())
    }

    /// Panic with the precondition message unless the grid is engine input.
    pub(crate) fn assert_engine_input(&self) {
        if let Err(err) = self.check_endpoints() {
            panic!("invalid grid: {err}");
        }
    }

    /// Mirror the grid across its main diagonal.
    pub fn transpose(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.len());
        for column in 0..self.columns {
            for row in 0..self.rows {
                cells.push(self.cells[row * self.columns + column]);
            }
        }
        Grid {
            rows: self.columns,
            columns: self.rows,
            cells,
        }
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<CellFlag>> = Vec::new();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = rows.len();
            let parsed = line
                .chars()
                .enumerate()
                .map(|(column, ch)| {
                    CellFlag::from_char(ch).ok_or(GridError::UnknownCell { ch, row, column })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(parsed);
        }
        Grid::from_rows(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns.max(1)) {
            for flag in row {
                write!(f, "{}", flag.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
