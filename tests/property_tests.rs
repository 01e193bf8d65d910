//! Property tests: random deals and random playouts must preserve the
//! engine's invariants.

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use banqi::core::{Action, Cell, HiddenLayout, Piece, Position, Side, BOARD_CELLS};
use banqi::game::BanqiGame;
use banqi::rules::GameResult;

/// Piece count on the board plus captures.
fn accounted(game: &BanqiGame) -> usize {
    let census = game.board().census();
    census.face_down
        + census.black
        + census.red
        + game.captured(Side::Black).len()
        + game.captured(Side::Red).len()
}

/// Play random legal actions until the game ends or `max_plies` is reached.
fn playout(game: &mut BanqiGame, seed: u64, max_plies: usize) -> Option<GameResult> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for _ in 0..max_plies {
        if let Some(result) = game.who_wins() {
            return Some(result);
        }
        let moves = game.legal_moves();
        let Some(&action) = moves.choose(&mut rng) else {
            return None;
        };
        game.apply(action).unwrap();
        assert_eq!(accounted(game), BOARD_CELLS, "piece lost after {action}");
        game.change_player().unwrap();
    }
    game.who_wins()
}

proptest! {
    #[test]
    fn prop_deal_is_canonical_multiset(seed in any::<u64>()) {
        let game = BanqiGame::new(seed);
        let mut dealt: Vec<Piece> = game.state().hidden().pieces().to_vec();
        let mut canonical: Vec<Piece> = HiddenLayout::canonical().pieces().to_vec();
        dealt.sort_by_key(|p| (p.side.index(), p.rank.power()));
        canonical.sort_by_key(|p| (p.side.index(), p.rank.power()));
        prop_assert_eq!(dealt, canonical);
    }

    #[test]
    fn prop_flip_reveals_hidden(seed in any::<u64>(), index in 0..BOARD_CELLS) {
        let mut game = BanqiGame::new(seed);
        let at = Position::from_index(index).unwrap();
        let expected = game.state().hidden().piece_at(at);

        let piece = game.flip(at.row() as i32, at.col() as i32).unwrap();
        prop_assert_eq!(piece, expected);
        prop_assert_eq!(game.current_side(), Some(piece.side));
        prop_assert_eq!(game.board().get(at), Cell::Revealed(piece));
    }

    #[test]
    fn prop_rejected_actions_leave_state(
        seed in any::<u64>(),
        plies in 0usize..40,
        coords in prop::array::uniform4(-2i32..10),
    ) {
        let mut game = BanqiGame::new(seed);
        playout(&mut game, seed, plies);
        let before = game.state().clone();

        let [fr, fc, tr, tc] = coords;
        if !game.can_move(fr, fc, tr, tc) {
            prop_assert!(game.move_piece(fr, fc, tr, tc).is_err());
            prop_assert_eq!(game.state(), &before);
        }
        if !game.can_flip(fr, fc) {
            prop_assert!(game.flip(fr, fc).is_err());
            prop_assert_eq!(game.state(), &before);
        }
    }

    #[test]
    fn prop_legal_moves_are_accepted(seed in any::<u64>(), plies in 0usize..60) {
        let mut game = BanqiGame::new(seed);
        playout(&mut game, seed ^ 0x5eed, plies);

        for action in game.legal_moves() {
            match action {
                Action::Flip(at) => prop_assert!(game.can_flip(at.row() as i32, at.col() as i32)),
                Action::Move { from, to } => prop_assert!(game.can_move(
                    from.row() as i32,
                    from.col() as i32,
                    to.row() as i32,
                    to.col() as i32,
                )),
            }
        }
    }

    #[test]
    fn prop_playout_conserves_pieces(seed in any::<u64>()) {
        let mut game = BanqiGame::new(seed);
        playout(&mut game, seed, 300);
        prop_assert_eq!(accounted(&game), BOARD_CELLS);
        prop_assert!(game.no_progress() <= game.rules().draw_threshold);
    }
}

#[test]
fn test_random_playouts_finish() {
    for seed in 0..20 {
        let mut game = BanqiGame::new(seed);
        let result = playout(&mut game, seed, 2_000);
        let stuck = result.is_none() && game.legal_moves().is_empty();
        assert!(result.is_some() || stuck, "seed {seed} did not finish:\n{}", game.board());
    }
}
