//! Game state: everything needed to resume a game.
//!
//! ## GameState
//!
//! - Board (32 cells)
//! - Hidden layout (consumed on flip)
//! - Capture lists per side
//! - Turn slot and bound side
//! - No-progress counter
//!
//! Capture lists use `im` persistent vectors so a snapshot of the state is
//! O(1) to clone.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::error;

use super::board::{Board, Cell};
use super::layout::HiddenLayout;
use super::piece::{Piece, Side};
use super::player::{PlayerSlot, SideMap};

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Board contents.
    pub(crate) board: Board,

    /// Hidden identity of every cell.
    pub(crate) hidden: HiddenLayout,

    /// Captured pieces, keyed by the side that lost them, in capture order.
    pub(crate) captured: SideMap<Vector<Piece>>,

    /// Slot to move.
    pub(crate) current_player: PlayerSlot,

    /// Side to move. `None` until the first flip.
    pub(crate) current_side: Option<Side>,

    /// Consecutive non-capturing relocations.
    pub(crate) no_progress: u32,
}

impl GameState {
    /// A fresh game over the given deal: every cell face down.
    #[must_use]
    pub fn new(hidden: HiddenLayout) -> Self {
        Self::from_position(Board::face_down(), hidden, None, PlayerSlot::First)
    }

    /// An arbitrary position, for puzzles and tests.
    ///
    /// Face-down cells on `board` reveal the `hidden` entry at their index.
    #[must_use]
    pub fn from_position(
        board: Board,
        hidden: HiddenLayout,
        current_side: Option<Side>,
        current_player: PlayerSlot,
    ) -> Self {
        Self {
            board,
            hidden,
            captured: SideMap::with_default(),
            current_player,
            current_side,
            no_progress: 0,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn hidden(&self) -> &HiddenLayout {
        &self.hidden
    }

    /// Pieces of `side` that have been captured, oldest first.
    #[must_use]
    pub fn captured(&self, side: Side) -> &Vector<Piece> {
        &self.captured[side]
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerSlot {
        self.current_player
    }

    #[must_use]
    pub fn current_side(&self) -> Option<Side> {
        self.current_side
    }

    #[must_use]
    pub fn no_progress(&self) -> u32 {
        self.no_progress
    }

    /// Append a captured cell to its side's list.
    ///
    /// # Panics
    ///
    /// Only revealed pieces can be captured. An empty or face-down cell here
    /// means move classification and execution disagree.
    pub(crate) fn record_capture(&mut self, cell: Cell) -> Piece {
        match cell {
            Cell::Revealed(piece) => {
                self.captured[piece.side].push_back(piece);
                piece
            }
            Cell::Empty | Cell::FaceDown => {
                error!(?cell, "capture of a cell without a revealed piece");
                panic!("Cannot capture {cell:?}");
            }
        }
    }
}
