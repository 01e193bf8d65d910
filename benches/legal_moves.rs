use banqi::core::{Board, Piece, Position, Rank, Side};
use banqi::game::BanqiGame;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

/// A fully revealed midgame with cannons on open lines.
fn midgame() -> BanqiGame {
    let mut board = Board::empty();
    let pieces = [
        (0, 0, Piece::black(Rank::Cannon)),
        (0, 2, Piece::red(Rank::Horse)),
        (1, 1, Piece::black(Rank::General)),
        (2, 3, Piece::red(Rank::Cannon)),
        (3, 0, Piece::black(Rank::Soldier)),
        (3, 2, Piece::red(Rank::Chariot)),
        (4, 1, Piece::black(Rank::Elephant)),
        (5, 3, Piece::red(Rank::Soldier)),
        (6, 0, Piece::black(Rank::Cannon)),
        (7, 2, Piece::red(Rank::General)),
    ];
    for (row, col, piece) in pieces {
        board = board.with_piece(Position::new(row, col).unwrap(), piece);
    }
    BanqiGame::builder().seed(0).position(board, Side::Black).build()
}

fn legal_moves(c: &mut Criterion) {
    let fresh = BanqiGame::new(0);
    let midgame = midgame();

    c.benchmark_group("benches")
        .bench_function("legal_moves/fresh", |b| b.iter(|| black_box(&fresh).legal_moves()))
        .bench_function("legal_moves/midgame", |b| b.iter(|| black_box(&midgame).legal_moves()));
}

fn playout(c: &mut Criterion) {
    let mut seeds = 0u64..;

    c.benchmark_group("benches").bench_function("playout", |b| {
        b.iter_batched_ref(
            || {
                let seed = seeds.next().unwrap_or_default();
                (BanqiGame::new(seed), ChaCha8Rng::seed_from_u64(seed))
            },
            |(game, rng)| {
                while game.who_wins().is_none() {
                    let moves = game.legal_moves();
                    let Some(&action) = moves.choose(rng) else {
                        break;
                    };
                    game.apply(action).unwrap();
                    game.change_player().unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, legal_moves, playout);
criterion_main!(benches);
