//! The hidden deal: which piece lies under each face-down cell.
//!
//! A layout is a permutation of the canonical 32-piece multiset. It is fixed
//! when a game starts and only read afterwards; flipping a cell reveals the
//! layout entry at that cell's index.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::piece::{Piece, Rank, Side};
use super::position::{Position, BOARD_CELLS};

/// Why a caller-supplied layout was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout must hold 32 pieces, got {0}")]
    WrongLength(usize),
    #[error("layout holds {found} of {piece}, expected {expected}")]
    WrongCount {
        piece: Piece,
        expected: usize,
        found: usize,
    },
}

/// Hidden identity of every cell, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HiddenLayout {
    pieces: [Piece; BOARD_CELLS],
}

impl HiddenLayout {
    /// The canonical multiset in a fixed order: Black then Red, strongest
    /// rank first.
    #[must_use]
    pub fn canonical() -> Self {
        let mut pieces = [Piece::black(Rank::General); BOARD_CELLS];
        let deal = Side::ALL.iter().flat_map(|&side| {
            Rank::ALL.iter().flat_map(move |&rank| {
                std::iter::repeat(Piece::new(side, rank)).take(rank.count_per_side())
            })
        });
        for (slot, piece) in pieces.iter_mut().zip(deal) {
            *slot = piece;
        }
        Self { pieces }
    }

    /// A uniformly random permutation of the canonical multiset.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut layout = Self::canonical();
        layout.pieces.shuffle(rng);
        layout
    }

    /// Validate an explicit deal against the canonical multiset.
    pub fn from_pieces(pieces: &[Piece]) -> Result<Self, LayoutError> {
        let pieces: [Piece; BOARD_CELLS] = pieces
            .try_into()
            .map_err(|_| LayoutError::WrongLength(pieces.len()))?;

        let mut counts: FxHashMap<Piece, usize> = FxHashMap::default();
        for piece in pieces {
            *counts.entry(piece).or_insert(0) += 1;
        }

        for side in Side::ALL {
            for rank in Rank::ALL {
                let piece = Piece::new(side, rank);
                let found = counts.get(&piece).copied().unwrap_or(0);
                if found != rank.count_per_side() {
                    return Err(LayoutError::WrongCount {
                        piece,
                        expected: rank.count_per_side(),
                        found,
                    });
                }
            }
        }

        Ok(Self { pieces })
    }

    /// The piece hidden at `pos`.
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Piece {
        self.pieces[pos.index()]
    }

    /// All pieces, row-major.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
}

impl Default for HiddenLayout {
    fn default() -> Self {
        Self::canonical()
    }
}
