//! Game outcome.

use serde::{Deserialize, Serialize};

use crate::core::{Board, RuleConfig, Side};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One side has no pieces left.
    Winner(Side),
    /// The no-progress counter reached the draw threshold.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(side) => write!(f, "{side} wins"),
            GameResult::Draw => f.write_str("draw"),
        }
    }
}

/// Decide the game, or `None` while it continues.
///
/// The draw rule is checked first. Otherwise no result is possible while any
/// cell is still face down, since hidden pieces belong to both sides.
#[must_use]
pub fn judge(board: &Board, no_progress: u32, rules: &RuleConfig) -> Option<GameResult> {
    if no_progress >= rules.draw_threshold {
        return Some(GameResult::Draw);
    }

    if board.has_face_down() {
        return None;
    }

    let census = board.census();
    Side::ALL
        .into_iter()
        .find(|&side| census.pieces(side) == 0)
        .map(|side| GameResult::Winner(side.opponent()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Piece, Position, Rank};

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_is_winner() {
        let result = GameResult::Winner(Side::Red);
        assert!(result.is_winner(Side::Red));
        assert!(!result.is_winner(Side::Black));
        assert!(!GameResult::Draw.is_winner(Side::Black));
    }

    #[test]
    fn test_draw_takes_precedence() {
        let board = Board::face_down();
        let rules = RuleConfig::default();
        assert_eq!(judge(&board, 20, &rules), Some(GameResult::Draw));
        assert_eq!(judge(&board, 19, &rules), None);
    }

    #[test]
    fn test_face_down_keeps_game_open() {
        let board = Board::empty()
            .with_piece(pos(0, 0), Piece::red(Rank::Soldier))
            .with(pos(7, 3), Cell::FaceDown);
        assert_eq!(judge(&board, 0, &RuleConfig::default()), None);
    }

    #[test]
    fn test_elimination() {
        let rules = RuleConfig::default();
        let red_only = Board::empty().with_piece(pos(4, 2), Piece::red(Rank::Cannon));
        let black_only = Board::empty().with_piece(pos(4, 2), Piece::black(Rank::Cannon));
        let both = red_only.clone().with_piece(pos(0, 0), Piece::black(Rank::Soldier));

        assert_eq!(judge(&red_only, 0, &rules), Some(GameResult::Winner(Side::Red)));
        assert_eq!(judge(&black_only, 0, &rules), Some(GameResult::Winner(Side::Black)));
        assert_eq!(judge(&both, 0, &rules), None);
    }

    #[test]
    fn test_empty_board_goes_to_red() {
        // Both counts are zero; Black is checked first.
        assert_eq!(
            judge(&Board::empty(), 0, &RuleConfig::default()),
            Some(GameResult::Winner(Side::Red))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(GameResult::Winner(Side::Black).to_string(), "Black wins");
        assert_eq!(GameResult::Draw.to_string(), "draw");
    }
}
