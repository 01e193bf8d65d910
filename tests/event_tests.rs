//! Event integration tests.
//!
//! These tests verify the engine reports each state change to its observers,
//! in order, and only after the change is complete.

use std::cell::RefCell;
use std::rc::Rc;

use banqi::core::{Board, HiddenLayout, Piece, PlayerSlot, Position, Rank, Side};
use banqi::events::{EventKind, GameEvent};
use banqi::game::BanqiGame;

fn pos(row: i32, col: i32) -> Position {
    Position::new(row, col).unwrap()
}

fn record(game: &mut BanqiGame) -> Rc<RefCell<Vec<GameEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    game.subscribe(move |event| sink.borrow_mut().push(*event));
    log
}

/// The first flip reports the reveal, then the side assignment.
#[test]
fn test_first_flip_events() {
    let mut game = BanqiGame::builder().seed(1).layout(HiddenLayout::canonical()).build();
    let log = record(&mut game);

    game.flip(0, 0).unwrap();
    game.change_player().unwrap();
    game.flip(0, 1).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            GameEvent::Flipped { at: pos(0, 0), piece: Piece::black(Rank::General) },
            GameEvent::SideAssigned { player: PlayerSlot::First, side: Side::Black },
            GameEvent::TurnChanged { player: PlayerSlot::Second, side: Side::Red },
            GameEvent::Flipped { at: pos(0, 1), piece: Piece::black(Rank::Advisor) },
        ]
    );
}

/// Moves and captures carry the pieces involved.
#[test]
fn test_move_and_capture_events() {
    let board = Board::empty()
        .with_piece(pos(0, 0), Piece::black(Rank::Cannon))
        .with_piece(pos(1, 0), Piece::black(Rank::Soldier))
        .with_piece(pos(2, 0), Piece::red(Rank::Elephant));
    let mut game = BanqiGame::builder().seed(1).position(board, Side::Black).build();
    let log = record(&mut game);

    game.move_piece(0, 0, 2, 0).unwrap();
    game.move_piece(2, 0, 3, 0).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            GameEvent::Captured {
                attacker: Piece::black(Rank::Cannon),
                victim: Piece::red(Rank::Elephant),
                from: pos(0, 0),
                to: pos(2, 0),
                jump: true,
            },
            GameEvent::Moved {
                piece: Piece::black(Rank::Cannon),
                from: pos(2, 0),
                to: pos(3, 0),
                jump: false,
            },
        ]
    );
}

/// Rejected actions are silent.
#[test]
fn test_rejections_emit_nothing() {
    let mut game = BanqiGame::new(5);
    let log = record(&mut game);

    assert!(game.change_player().is_err());
    assert!(game.flip(9, 9).is_err());
    assert!(game.move_piece(0, 0, 0, 1).is_err());

    assert!(log.borrow().is_empty());
}

/// Filtered observers only hear the kinds they asked for.
#[test]
fn test_filtered_subscription() {
    let mut game = BanqiGame::new(77);
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    game.subscribe_to(&[EventKind::Restarted], move |event| {
        *sink.borrow_mut() = Some(event.kind());
    });

    game.flip(3, 3).unwrap();
    assert_eq!(*seen.borrow(), None);

    game.restart();
    assert_eq!(*seen.borrow(), Some(EventKind::Restarted));
}

/// Unsubscribed observers stop receiving events.
#[test]
fn test_unsubscribe() {
    let mut game = BanqiGame::new(3);
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let id = game.subscribe(move |_| *sink.borrow_mut() += 1);

    game.flip(0, 0).unwrap();
    assert!(game.unsubscribe(id));
    game.flip(0, 1).unwrap();

    assert_eq!(*count.borrow(), 1);
    assert!(!game.unsubscribe(id));
}

/// Events survive a JSON round trip for logging sinks.
#[test]
fn test_event_json() {
    let mut game = BanqiGame::builder().seed(1).layout(HiddenLayout::canonical()).build();
    let log = record(&mut game);
    game.flip(7, 3).unwrap();

    let json = serde_json::to_string(&*log.borrow()).unwrap();
    let events: Vec<GameEvent> = serde_json::from_str(&json).unwrap();
    assert_eq!(events, *log.borrow());
}
