//! Core engine types: pieces, positions, board, deal, turn state, RNG,
//! configuration.
//!
//! Everything here is plain data. The rules that interpret it live in
//! [`crate::rules`]; the stateful engine is [`crate::game::BanqiGame`].

pub mod piece;
pub mod position;
pub mod board;
pub mod layout;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use piece::{Piece, Rank, Side};
pub use position::{is_valid_position, Position, BOARD_CELLS, BOARD_COLS, BOARD_ROWS};
pub use board::{Board, BoardSnapshot, Cell, CellCensus};
pub use layout::{HiddenLayout, LayoutError};
pub use player::{PlayerSlot, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::{RuleConfig, DEFAULT_DRAW_THRESHOLD};
pub use action::Action;
pub use state::GameState;
