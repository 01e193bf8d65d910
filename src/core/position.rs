//! Board coordinates.
//!
//! The board is 8 rows by 4 columns, indexed row-major:
//!
//! ```text
//!        col 0  col 1  col 2  col 3
//! row 0    0      1      2      3
//! row 1    4      5      6      7
//! ...
//! row 7   28     29     30     31
//! ```
//!
//! Raw coordinates arrive as `i32` from callers (a UI may compute negative or
//! oversized values from pointer input); `Position` only exists for cells on
//! the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Board height.
pub const BOARD_ROWS: usize = 8;
/// Board width.
pub const BOARD_COLS: usize = 4;
/// Number of cells.
pub const BOARD_CELLS: usize = BOARD_ROWS * BOARD_COLS;

/// True iff `(row, col)` lies on the board.
#[must_use]
pub const fn is_valid_position(row: i32, col: i32) -> bool {
    row >= 0 && row < BOARD_ROWS as i32 && col >= 0 && col < BOARD_COLS as i32
}

/// A validated cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Validate raw coordinates.
    ///
    /// ```
    /// use banqi::core::Position;
    ///
    /// assert!(Position::new(7, 3).is_some());
    /// assert!(Position::new(8, 0).is_none());
    /// assert!(Position::new(0, -1).is_none());
    /// ```
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Option<Self> {
        if is_valid_position(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Position for a row-major cell index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_CELLS {
            Some(Self {
                row: (index / BOARD_COLS) as u8,
                col: (index % BOARD_COLS) as u8,
            })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row() * BOARD_COLS + self.col()
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_CELLS).filter_map(Position::from_index)
    }

    /// Manhattan distance.
    #[must_use]
    pub fn distance(self, other: Position) -> usize {
        self.row().abs_diff(other.row()) + self.col().abs_diff(other.col())
    }

    /// True iff both cells share exactly one of row or column.
    #[must_use]
    pub fn is_orthogonal_to(self, other: Position) -> bool {
        (self.row == other.row) != (self.col == other.col)
    }

    /// Orthogonal neighbours, in row-major order.
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Position; 4]> {
        let (row, col) = (self.row as i32, self.col as i32);
        [(row - 1, col), (row, col - 1), (row, col + 1), (row + 1, col)]
            .into_iter()
            .filter_map(|(r, c)| Position::new(r, c))
            .collect()
    }

    /// Every other cell in the same row or column, in row-major order.
    pub fn lines(self) -> impl Iterator<Item = Position> {
        Position::all().filter(move |&p| p != self && (p.row == self.row || p.col == self.col))
    }

    /// Cells strictly between two orthogonally aligned cells.
    ///
    /// Empty when the cells are adjacent, identical or not aligned.
    pub fn between(self, other: Position) -> impl Iterator<Item = Position> {
        let aligned = self.is_orthogonal_to(other);
        let (lo, hi) = (self.min(other), self.max(other));
        let same_row = lo.row == hi.row;
        let steps = if aligned { lo.distance(hi).saturating_sub(1) } else { 0 };

        (1..=steps).filter_map(move |step| {
            let step = step as i32;
            if same_row {
                Position::new(lo.row as i32, lo.col as i32 + step)
            } else {
                Position::new(lo.row as i32 + step, lo.col as i32)
            }
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
