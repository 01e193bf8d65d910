//! Rejected actions.
//!
//! Every variant is an expected, recoverable outcome of offering the engine
//! an action it cannot take. The engine state is unchanged whenever one of
//! these is returned.

use thiserror::Error;

use super::movement::MoveViolation;
use crate::core::Position;

/// Why the engine refused an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("position ({row}, {col}) is off the board")]
    InvalidPosition { row: i32, col: i32 },

    #[error("cell {0} is not face down")]
    NotFaceDown(Position),

    #[error("illegal move {from} -> {to}: {violation}")]
    IllegalMove {
        from: Position,
        to: Position,
        violation: MoveViolation,
    },

    #[error("no side has been revealed yet")]
    SideUnknown,
}

/// Validate raw coordinates.
pub(crate) fn checked_position(row: i32, col: i32) -> Result<Position, ActionError> {
    Position::new(row, col).ok_or(ActionError::InvalidPosition { row, col })
}
