//! Banqi rules as pure functions over a board.
//!
//! - [`classify_move`]: movement and capture legality
//! - [`judge`]: win/draw detection
//! - [`ActionError`]: why the engine rejected an action
//!
//! Nothing here mutates state; [`crate::game::BanqiGame`] applies the rules.

pub mod error;
pub mod movement;
pub mod outcome;

pub use error::ActionError;
pub use movement::{can_overpower, classify_move, MoveKind, MoveViolation};
pub use outcome::{judge, GameResult};
