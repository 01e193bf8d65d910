//! Game event types.
//!
//! Events describe what the engine just did. They are emitted after the
//! state change is complete, so an observer may read the game freely.

use serde::{Deserialize, Serialize};

use crate::core::{Piece, PlayerSlot, Position, Side};

/// Something that happened in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new deal was made and the board reset.
    Restarted,

    /// A face-down cell was revealed.
    Flipped { at: Position, piece: Piece },

    /// The first flip bound the player to move to a side.
    SideAssigned { player: PlayerSlot, side: Side },

    /// A piece moved without capturing.
    Moved {
        piece: Piece,
        from: Position,
        to: Position,
        jump: bool,
    },

    /// A piece captured another.
    Captured {
        attacker: Piece,
        victim: Piece,
        from: Position,
        to: Position,
        jump: bool,
    },

    /// The turn passed to the other player.
    TurnChanged { player: PlayerSlot, side: Side },
}

/// Event discriminant, for filtered subscriptions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Restarted,
    Flipped,
    SideAssigned,
    Moved,
    Captured,
    TurnChanged,
}

impl GameEvent {
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            GameEvent::Restarted => EventKind::Restarted,
            GameEvent::Flipped { .. } => EventKind::Flipped,
            GameEvent::SideAssigned { .. } => EventKind::SideAssigned,
            GameEvent::Moved { .. } => EventKind::Moved,
            GameEvent::Captured { .. } => EventKind::Captured,
            GameEvent::TurnChanged { .. } => EventKind::TurnChanged,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Restarted => f.write_str("new game"),
            GameEvent::Flipped { at, piece } => write!(f, "{piece} revealed at {at}"),
            GameEvent::SideAssigned { player, side } => write!(f, "{player} plays {side}"),
            GameEvent::Moved { piece, from, to, .. } => write!(f, "{piece} {from} -> {to}"),
            GameEvent::Captured { attacker, victim, to, .. } => {
                write!(f, "{attacker} captures {victim} at {to}")
            }
            GameEvent::TurnChanged { player, side } => write!(f, "{player} ({side}) to move"),
        }
    }
}
