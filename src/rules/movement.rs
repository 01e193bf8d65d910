//! Movement and capture legality.
//!
//! [`classify_move`] is the single predicate behind `can_move`, `move_piece`
//! and legal-move enumeration. It either names the kind of move the engine
//! must execute or the first rule the move breaks. Checks run in a fixed
//! order and stop at the first failure:
//!
//! 1. source and destination differ
//! 2. the move is orthogonal
//! 3. a side is to move and the source piece belongs to it
//! 4. the source holds a revealed piece
//! 5. the destination is not face down
//! 6. the destination is not a friendly piece
//! 7. beyond one step: Cannon only, over exactly one occupied cell
//! 8. one step: onto an empty cell, or a capture allowed by power

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Board, Cell, Piece, Position, Rank, RuleConfig, Side};

/// What executing an approved move does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// One step onto an empty cell.
    Slide,
    /// Cannon jump over one screen onto an empty cell.
    JumpSlide,
    /// One-step capture of the named piece.
    Capture(Piece),
    /// Cannon jump over one screen capturing the named piece.
    JumpCapture(Piece),
}

impl MoveKind {
    /// The captured piece, if the move captures.
    #[must_use]
    pub const fn victim(self) -> Option<Piece> {
        match self {
            MoveKind::Capture(victim) | MoveKind::JumpCapture(victim) => Some(victim),
            MoveKind::Slide | MoveKind::JumpSlide => None,
        }
    }

    #[must_use]
    pub const fn is_jump(self) -> bool {
        matches!(self, MoveKind::JumpSlide | MoveKind::JumpCapture(_))
    }
}

/// The first rule a move breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum MoveViolation {
    #[error("source and destination are the same cell")]
    SameSquare,
    #[error("moves must be along a row or a column")]
    NotOrthogonal,
    #[error("no side has been revealed yet")]
    SideUnknown,
    #[error("the piece belongs to {0}")]
    WrongSide(Side),
    #[error("there is no revealed piece at the source")]
    NoPieceAtSource,
    #[error("cannot move onto a face-down piece")]
    FaceDownTarget,
    #[error("cannot capture a friendly piece")]
    FriendlyTarget,
    #[error("only a Cannon may move more than one step")]
    OutOfReach,
    #[error("a Cannon must jump exactly one piece, found {0}")]
    ScreenCount(usize),
    #[error("a Cannon cannot capture an adjacent piece")]
    CannonAdjacentCapture,
    #[error("{attacker} cannot capture {victim}")]
    Outranked { attacker: Rank, victim: Rank },
}

/// Classify a move for the side to move.
///
/// ```
/// use banqi::core::{Board, Piece, Position, Rank, RuleConfig, Side};
/// use banqi::rules::{classify_move, MoveKind, MoveViolation};
///
/// let at = |r, c| Position::new(r, c).unwrap();
/// let board = Board::empty()
///     .with_piece(at(0, 0), Piece::black(Rank::Soldier))
///     .with_piece(at(0, 1), Piece::red(Rank::General));
/// let rules = RuleConfig::default();
///
/// assert_eq!(
///     classify_move(&board, Some(Side::Black), &rules, at(0, 0), at(0, 1)),
///     Ok(MoveKind::Capture(Piece::red(Rank::General))),
/// );
/// assert_eq!(
///     classify_move(&board, None, &rules, at(0, 0), at(1, 0)),
///     Err(MoveViolation::SideUnknown),
/// );
/// ```
pub fn classify_move(
    board: &Board,
    side: Option<Side>,
    rules: &RuleConfig,
    from: Position,
    to: Position,
) -> Result<MoveKind, MoveViolation> {
    if from == to {
        return Err(MoveViolation::SameSquare);
    }
    if !from.is_orthogonal_to(to) {
        return Err(MoveViolation::NotOrthogonal);
    }

    let side = side.ok_or(MoveViolation::SideUnknown)?;
    let attacker = match board.get(from) {
        Cell::Revealed(piece) if piece.side != side => {
            return Err(MoveViolation::WrongSide(piece.side))
        }
        Cell::Revealed(piece) => piece,
        Cell::Empty | Cell::FaceDown => return Err(MoveViolation::NoPieceAtSource),
    };

    let target = board.get(to);
    let victim = match target {
        Cell::FaceDown => return Err(MoveViolation::FaceDownTarget),
        Cell::Revealed(piece) if piece.side == side => {
            return Err(MoveViolation::FriendlyTarget)
        }
        Cell::Revealed(piece) => Some(piece),
        Cell::Empty => None,
    };

    if from.distance(to) != 1 {
        if !attacker.is_cannon() {
            return Err(MoveViolation::OutOfReach);
        }
        let screens = from.between(to).filter(|&p| board.get(p).is_occupied()).count();
        if screens != 1 {
            return Err(MoveViolation::ScreenCount(screens));
        }
        return Ok(victim.map_or(MoveKind::JumpSlide, MoveKind::JumpCapture));
    }

    let Some(victim) = victim else {
        return Ok(MoveKind::Slide);
    };

    if attacker.is_cannon() {
        return Err(MoveViolation::CannonAdjacentCapture);
    }
    if can_overpower(attacker.rank, victim.rank, rules) {
        Ok(MoveKind::Capture(victim))
    } else {
        Err(MoveViolation::Outranked {
            attacker: attacker.rank,
            victim: victim.rank,
        })
    }
}

/// Adjacent capture by power: Soldier beats General, otherwise a piece beats
/// anything of equal or lower power.
#[must_use]
pub fn can_overpower(attacker: Rank, victim: Rank, rules: &RuleConfig) -> bool {
    match (attacker, victim) {
        (Rank::Soldier, Rank::General) => true,
        (Rank::General, Rank::Soldier) => rules.general_captures_soldier,
        _ => attacker.power() >= victim.power(),
    }
}
