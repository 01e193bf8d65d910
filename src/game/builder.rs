//! Builder for configured games.

use tracing::debug;

use super::engine::BanqiGame;
use crate::core::{Board, GameRng, GameState, HiddenLayout, PlayerSlot, RuleConfig, Side};

/// Builder for creating a [`BanqiGame`].
///
/// ```
/// use banqi::game::BanqiGame;
///
/// let game = BanqiGame::builder().seed(9).draw_threshold(40).build();
/// assert_eq!(game.rules().draw_threshold, 40);
/// ```
#[derive(Debug, Default)]
pub struct BanqiGameBuilder {
    rng: Option<GameRng>,
    rules: RuleConfig,
    layout: Option<HiddenLayout>,
    position: Option<(Board, Side)>,
    player: PlayerSlot,
}

impl BanqiGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal from a seeded RNG. Without a seed the deal is drawn from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Some(GameRng::new(seed));
        self
    }

    pub fn rng(mut self, rng: GameRng) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn rules(mut self, rules: RuleConfig) -> Self {
        self.rules = rules;
        self
    }

    pub fn draw_threshold(mut self, threshold: u32) -> Self {
        self.rules = self.rules.with_draw_threshold(threshold);
        self
    }

    /// Use a fixed deal instead of shuffling.
    pub fn layout(mut self, layout: HiddenLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Start from an arbitrary board with `side` to move.
    ///
    /// Face-down cells on the board still reveal from the deal.
    pub fn position(mut self, board: Board, side: Side) -> Self {
        self.position = Some((board, side));
        self
    }

    /// Slot to move first. A restart hands the first move back to
    /// [`PlayerSlot::First`].
    pub fn player(mut self, player: PlayerSlot) -> Self {
        self.player = player;
        self
    }

    /// Build the game.
    pub fn build(self) -> BanqiGame {
        let mut rng = self.rng.unwrap_or_else(GameRng::from_entropy);
        let hidden = self
            .layout
            .unwrap_or_else(|| HiddenLayout::shuffled(&mut rng));

        let (board, side) = match self.position {
            Some((board, side)) => (board, Some(side)),
            None => (Board::face_down(), None),
        };
        let state = GameState::from_position(board, hidden, side, self.player);

        debug!(
            seed = rng.seed(),
            draw_threshold = self.rules.draw_threshold,
            "game created"
        );
        BanqiGame::from_parts(state, self.rules, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Piece, Position, Rank};

    #[test]
    fn test_same_seed_same_deal() {
        let a = BanqiGameBuilder::new().seed(17).build();
        let b = BanqiGameBuilder::new().seed(17).build();
        let c = BanqiGameBuilder::new().seed(18).build();

        assert_eq!(a.state().hidden(), b.state().hidden());
        assert_ne!(a.state().hidden(), c.state().hidden());
    }

    #[test]
    fn test_fixed_layout() {
        let mut game = BanqiGameBuilder::new()
            .seed(1)
            .layout(HiddenLayout::canonical())
            .build();
        assert_eq!(game.flip(7, 3), Ok(Piece::red(Rank::Soldier)));
    }

    #[test]
    fn test_position_and_player() {
        let at = Position::new(4, 2).unwrap();
        let game = BanqiGameBuilder::new()
            .seed(1)
            .position(Board::empty().with_piece(at, Piece::red(Rank::Cannon)), Side::Red)
            .player(PlayerSlot::Second)
            .build();

        assert_eq!(game.current_side(), Some(Side::Red));
        assert_eq!(game.current_player(), PlayerSlot::Second);
        assert_eq!(game.board().census().red, 1);
    }

    #[test]
    fn test_player_on_fresh_game() {
        let mut game = BanqiGameBuilder::new()
            .seed(1)
            .player(PlayerSlot::Second)
            .build();

        assert_eq!(game.current_player(), PlayerSlot::Second);
        assert_eq!(game.board().census().face_down, 32);

        let piece = game.flip(0, 0).unwrap();
        assert_eq!(game.current_side(), Some(piece.side));
        game.change_player().unwrap();
        assert_eq!(game.current_player(), PlayerSlot::First);
    }

    #[test]
    fn test_rules() {
        let game = BanqiGameBuilder::new()
            .rules(RuleConfig::default().general_spares_soldier())
            .draw_threshold(8)
            .build();

        assert!(!game.rules().general_captures_soldier);
        assert_eq!(game.rules().draw_threshold, 8);
    }

    #[test]
    #[should_panic(expected = "Draw threshold must be positive")]
    fn test_zero_draw_threshold() {
        let _ = BanqiGameBuilder::new().draw_threshold(0);
    }
}
