//! Board cells and the 32-cell grid.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::piece::{Piece, Side};
use super::position::{Position, BOARD_CELLS, BOARD_COLS, BOARD_ROWS};

/// Contents of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    FaceDown,
    Revealed(Piece),
}

impl Cell {
    /// The revealed piece, if any.
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Revealed(piece) => Some(piece),
            _ => None,
        }
    }

    /// Anything other than `Empty`. Face-down cells count as occupied.
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        !matches!(self, Cell::Empty)
    }

    #[must_use]
    pub const fn is_face_down(self) -> bool {
        matches!(self, Cell::FaceDown)
    }

    /// Single-character rendering used by board displays.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::FaceDown => '?',
            Cell::Revealed(piece) => piece.glyph(),
        }
    }
}

/// Read-only 8×4 grid handed to presentation code.
pub type BoardSnapshot = [[Cell; BOARD_COLS]; BOARD_ROWS];

/// Cell counts by category. Always sums to 32.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCensus {
    pub empty: usize,
    pub face_down: usize,
    pub black: usize,
    pub red: usize,
}

impl CellCensus {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.empty + self.face_down + self.black + self.red
    }

    /// Revealed pieces of one side.
    #[must_use]
    pub const fn pieces(&self, side: Side) -> usize {
        match side {
            Side::Black => self.black,
            Side::Red => self.red,
        }
    }
}

/// The 32-cell board, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// A board with every cell face down.
    #[must_use]
    pub fn face_down() -> Self {
        Self {
            cells: [Cell::FaceDown; BOARD_CELLS],
        }
    }

    /// A board with every cell empty. Used to set up positions.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Builder-style placement.
    #[must_use]
    pub fn with(mut self, pos: Position, cell: Cell) -> Self {
        self.set(pos, cell);
        self
    }

    /// Builder-style placement of a revealed piece.
    #[must_use]
    pub fn with_piece(self, pos: Position, piece: Piece) -> Self {
        self.with(pos, Cell::Revealed(piece))
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Replace a cell, returning what it held.
    pub fn take(&mut self, pos: Position) -> Cell {
        std::mem::take(&mut self.cells[pos.index()])
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all().map(move |p| (p, self.get(p)))
    }

    /// Positions holding a revealed piece of `side`.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells()
            .filter_map(|(p, c)| c.piece().map(|piece| (p, piece)))
            .filter(move |(_, piece)| piece.side == side)
    }

    #[must_use]
    pub fn has_face_down(&self) -> bool {
        self.cells.iter().any(|c| c.is_face_down())
    }

    /// Count cells by category.
    #[must_use]
    pub fn census(&self) -> CellCensus {
        let mut census = CellCensus::default();
        for cell in &self.cells {
            match cell {
                Cell::Empty => census.empty += 1,
                Cell::FaceDown => census.face_down += 1,
                Cell::Revealed(p) if p.side == Side::Black => census.black += 1,
                Cell::Revealed(_) => census.red += 1,
            }
        }
        census
    }

    /// Multiset of revealed pieces on the board.
    #[must_use]
    pub fn piece_counts(&self) -> FxHashMap<Piece, usize> {
        let mut counts = FxHashMap::default();
        for piece in self.cells.iter().filter_map(|c| c.piece()) {
            *counts.entry(piece).or_insert(0) += 1;
        }
        counts
    }

    /// Copy out as an 8×4 grid.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut grid = [[Cell::Empty; BOARD_COLS]; BOARD_ROWS];
        for (pos, cell) in self.cells() {
            grid[pos.row()][pos.col()] = cell;
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::face_down()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.snapshot() {
            let line: String = row.iter().map(|c| c.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
