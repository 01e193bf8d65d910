//! Action representation.
//!
//! A turn is either a flip of a face-down cell or a move of a revealed piece.
//! Callers pattern-match on the two cases instead of inspecting arity.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// A complete player action.
///
/// ```
/// use banqi::core::{Action, Position};
///
/// let a = Position::new(0, 0).unwrap();
/// let b = Position::new(0, 1).unwrap();
///
/// let flip = Action::Flip(a);
/// let step = Action::Move { from: a, to: b };
///
/// assert!(flip.is_flip());
/// assert_eq!(step.source(), a);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Reveal the piece under a face-down cell.
    Flip(Position),
    /// Move a revealed piece, capturing whatever opposing piece is at `to`.
    Move { from: Position, to: Position },
}

impl Action {
    #[must_use]
    pub const fn is_flip(&self) -> bool {
        matches!(self, Action::Flip(_))
    }

    /// The cell the action starts from.
    #[must_use]
    pub const fn source(&self) -> Position {
        match *self {
            Action::Flip(at) => at,
            Action::Move { from, .. } => from,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Flip(at) => write!(f, "flip {at}"),
            Action::Move { from, to } => write!(f, "move {from} -> {to}"),
        }
    }
}
