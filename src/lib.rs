//! # banqi
//!
//! A rules engine for Banqi, the hidden-information variant of Xiangqi played
//! on half a board.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: No rendering, input or AI. Callers drive the game by
//!    flipping, moving and changing players, then reading the state back.
//!
//! 2. **Rejections Are Values**: Illegal actions return an [`ActionError`]
//!    and leave the game untouched. Only a broken internal invariant panics.
//!
//! 3. **Reproducible Deals**: Every shuffle draws from a seedable
//!    [`GameRng`], so a seed fully determines the hidden layout.
//!
//! ## Modules
//!
//! - `core`: Pieces, positions, board, hidden layout, state, RNG, configuration
//! - `rules`: Movement, capture and outcome rules as pure functions
//! - `events`: Structured game events and observers
//! - `game`: The stateful [`BanqiGame`] engine and its builder

pub mod core;
pub mod rules;
pub mod events;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Piece, Rank, Side,
    Position, is_valid_position, BOARD_ROWS, BOARD_COLS, BOARD_CELLS,
    Board, BoardSnapshot, Cell, CellCensus,
    HiddenLayout, LayoutError,
    PlayerSlot, SideMap,
    GameRng, GameRngState,
    RuleConfig, DEFAULT_DRAW_THRESHOLD,
    Action, GameState,
};

pub use crate::rules::{
    ActionError, MoveKind, MoveViolation, GameResult,
    can_overpower, classify_move, judge,
};

pub use crate::events::{EventKind, GameEvent, ObserverId};

pub use crate::game::{BanqiGame, BanqiGameBuilder};
